//! Built-in route trees, one per documentation collection.

use crate::node::RouteNode;

/// All built-in collections, combined in sidebar order.
#[must_use]
pub fn builtin_routes() -> Vec<RouteNode> {
    vec![docs(), zustand(), typescript(), nextjs()]
}

fn docs() -> RouteNode {
    RouteNode::section("Getting Started", "/getting-started")
        .with_name("docs")
        .with_items(vec![
            RouteNode::page("Introduction", "/introduction"),
            RouteNode::page("Installation", "/installation"),
            RouteNode::page("Quick Start Guide", "/quick-start-guide"),
            RouteNode::page("Project Structure", "/project-structure"),
            RouteNode::page("Components", "/components").with_items(vec![
                RouteNode::page("Stepper", "/stepper"),
                RouteNode::page("Tabs", "/tabs"),
                RouteNode::page("Note", "/note"),
                RouteNode::page("Code Block", "/code-block"),
                RouteNode::page("Image & Link", "/image-link"),
                RouteNode::page("File System", "/file-system").with_tag("New"),
                RouteNode::page("Custom", "/custom"),
            ]),
            RouteNode::page("Internationalization", "/i18n"),
            RouteNode::page("Algolia Search", "/algolia-search").with_tag("New"),
            RouteNode::page("Themes", "/themes"),
            RouteNode::page("Customize", "/customize"),
        ])
}

fn zustand() -> RouteNode {
    RouteNode::section("Guia de Zustand", "/empezando")
        .with_name("zustand")
        .with_items(vec![
            RouteNode::page("Introduction", "/introduccion"),
            RouteNode::page("Guías", "/guias").with_items(vec![
                RouteNode::page("Tutorial Tic-Tac-Toe", "/tutorial-tic-tac-toe"),
                RouteNode::page("Actualizando Estado", "/actualizando-estado"),
                RouteNode::page("Estado inmutable y fusión", "/estado-inmutable-y-fusion"),
            ]),
        ])
}

fn typescript() -> RouteNode {
    RouteNode::page("documentacion de TypeScript", "/documentacion")
        .with_name("typescript")
        .with_items(vec![
            RouteNode::page("empezando", "/empezando").with_items(vec![
                RouteNode::page(
                    "Typescript como tu primer lenguaje",
                    "/introduccion-typescript",
                ),
                RouteNode::page(
                    "TypeScript para Programadores de JavaScript",
                    "/para-programadores-javascript",
                ),
                RouteNode::page(
                    "TypeScript para Programadores de Java o C#",
                    "/typescript-para-programadores-java-csharp",
                ),
                RouteNode::page(
                    "Herramientas de TypeScript en 5 minutos",
                    "/herramientas-en-5-minutos",
                ),
            ]),
            RouteNode::page("Manual Typescript", "/manual"),
        ])
}

fn nextjs() -> RouteNode {
    RouteNode::section("guia de nextjs", "/documentacion")
        .with_name("nextjs")
        .with_items(vec![
            RouteNode::page("Empezando", "/empezando").with_items(vec![RouteNode::page(
                "Instalacion de Next.js",
                "/instalacion-nextjs",
            )]),
        ])
}
