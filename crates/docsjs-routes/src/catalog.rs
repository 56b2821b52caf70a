//! Technologies offered on the documentation landing page.

use serde::Serialize;

/// A documented (or upcoming) technology.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    pub name: &'static str,
    /// Entry page of the collection.
    pub slug: &'static str,
    pub description: &'static str,
    pub coming_soon: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_light: Option<&'static str>,
    pub icon_dark: &'static str,
}

const fn tech(
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    coming_soon: bool,
    icon_dark: &'static str,
) -> Technology {
    Technology {
        name,
        slug,
        description,
        coming_soon,
        icon_light: None,
        icon_dark,
    }
}

const TECHNOLOGIES: &[Technology] = &[
    tech(
        "Next.js",
        "/docs/nextjs/empezando/guias",
        "Librería de React para construir interfaces de usuario interactivas.",
        true,
        "/icons/nextjs.svg",
    ),
    tech(
        "Zustand",
        "/docs/zustand/empezando/introduccion",
        "Pequeña librería de gestión de estado para aplicaciones React.",
        false,
        "/icons/zustand.svg",
    ),
    Technology {
        icon_light: Some("/icons/Prisma.svg"),
        ..tech(
            "Prisma",
            "/docs/prisma/empezando",
            "ORM de próxima generación para Node.js y TypeScript con soporte para migraciones.",
            true,
            "/icons/prismad.svg",
        )
    },
    tech(
        "TypeScript",
        "/docs/typescript/documentacion",
        "Superset de JavaScript que añade tipado estático al lenguaje.",
        false,
        "/icons/TypeScript.png",
    ),
    tech(
        "Node.js",
        "/docs/nodejs/empezando/introduccion",
        "Entorno de ejecución para JavaScript en el servidor basado en V8.",
        true,
        "/icons/nodejs.png",
    ),
    Technology {
        icon_light: Some("/icons/express.png"),
        ..tech(
            "Express",
            "/docs/express/empezando/instalacion",
            "Framework minimalista para construir APIs y servidores con Node.js.",
            true,
            "/icons/expressd.svg",
        )
    },
    tech(
        "React",
        "/docs/react/empezando/introduccion",
        "Librería de JavaScript para construir interfaces de usuario reutilizables.",
        true,
        "/icons/React.png",
    ),
    tech(
        "Supabase",
        "/docs/supabase/empezando/introduccion",
        "Plataforma backend como servicio que reemplaza Firebase usando PostgreSQL.",
        true,
        "/icons/supabase.svg",
    ),
    tech(
        "PostgreSQL",
        "/docs/postgresql/empezando/instalacion",
        "Sistema de gestión de bases de datos relacional de código abierto.",
        true,
        "/icons/postgresql.svg",
    ),
    tech(
        "MongoDB",
        "/docs/mongodb/empezando/instalacion",
        "Base de datos NoSQL orientada a documentos, altamente escalable y flexible.",
        true,
        "/icons/mongodb.svg",
    ),
];

/// The technology catalog in display order.
#[must_use]
pub fn technologies() -> &'static [Technology] {
    TECHNOLOGIES
}
