//! The starter catalogs.
//!
//! These mirror the curated lists the dashboard ships with. They are drafts,
//! not finished items: ids and timestamps come from whichever store appends
//! them, so the usual uniqueness and ordering invariants hold.

use once_cell::sync::Lazy;

use crate::model::{CatalogKind, NewItem};

static COURSES: Lazy<Vec<NewItem>> = Lazy::new(|| {
    vec![
        NewItem::new(
            "Finanzas para emprendedores",
            "Aprende a manejar el flujo de caja, los costos y el presupuesto de tu negocio.",
        )
        .with_instructor("María González")
        .with_field("category", "Finanzas")
        .with_field("level", "Intermedio"),
        NewItem::new(
            "Marketing digital desde cero",
            "Estrategias de redes sociales, contenido y publicidad para atraer clientes.",
        )
        .with_instructor("Carlos Ruiz")
        .with_field("category", "Marketing")
        .with_field("level", "Principiante"),
        NewItem::new(
            "Gestión de equipos de alto rendimiento",
            "Coordina, delega y construye una cultura de trabajo que retiene talento.",
        )
        .with_instructor("Ana Martínez")
        .with_field("category", "Gestión")
        .with_field("level", "Avanzado"),
        NewItem::new(
            "Ventas consultivas",
            "Técnicas para entender al cliente, manejar objeciones y cerrar más tratos.",
        )
        .with_instructor("Jorge Pérez")
        .with_field("category", "Ventas")
        .with_field("level", "Intermedio"),
        NewItem::new(
            "Liderazgo para fundadores",
            "Desarrolla tu liderazgo y motiva equipos comprometidos con tu visión.",
        )
        .with_instructor("Lucía Fernández")
        .with_field("category", "Liderazgo")
        .with_field("level", "Intermedio"),
        NewItem::new(
            "Tecnología para tu negocio",
            "Herramientas digitales y automatización para operar con eficiencia.",
        )
        .with_instructor("Pedro Soto")
        .with_field("category", "Tecnología")
        .with_field("level", "Principiante"),
    ]
});

static RESOURCES: Lazy<Vec<NewItem>> = Lazy::new(|| {
    vec![
        NewItem::new(
            "Fondo Semilla",
            "Capital no reembolsable para validar tu idea y construir el primer prototipo.",
        )
        .with_field("category", "Subvención")
        .with_field("sector", "Todos")
        .with_field("stage", "Idea"),
        NewItem::new(
            "Crédito Mipyme",
            "Línea de crédito blanda para capital de trabajo de micro y pequeñas empresas.",
        )
        .with_field("category", "Crédito")
        .with_field("sector", "Comercio")
        .with_field("stage", "Crecimiento"),
        NewItem::new(
            "Aceleradora TechLab",
            "Programa de aceleración de cuatro meses con mentores y capital inicial.",
        )
        .with_field("category", "Aceleradora")
        .with_field("sector", "Tecnología")
        .with_field("stage", "Temprana"),
        NewItem::new(
            "Red de Mentores",
            "Sesiones de mentoría uno a uno con empresarios de tu región.",
        )
        .with_field("category", "Mentoría")
        .with_field("sector", "Todos")
        .with_field("stage", "Temprana"),
        NewItem::new(
            "Capital Ángel",
            "Red de inversionistas para rondas tempranas de empresas en crecimiento.",
        )
        .with_field("category", "Inversión")
        .with_field("sector", "Tecnología")
        .with_field("stage", "Crecimiento"),
    ]
});

/// Seed drafts for one catalog.
pub fn drafts(kind: CatalogKind) -> &'static [NewItem] {
    match kind {
        CatalogKind::Courses => COURSES.as_slice(),
        CatalogKind::Resources => RESOURCES.as_slice(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{self, QueryFilter};
    use crate::store::memory::fixtures;
    use crate::store::CatalogStore;

    fn ids(items: &[crate::model::CatalogItem]) -> Vec<u64> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn seeded_courses_get_ids_one_through_six() {
        let store = fixtures::seeded();
        let courses = store.list(CatalogKind::Courses).unwrap();
        assert_eq!(ids(&courses), [1, 2, 3, 4, 5, 6]);
        assert!(courses.iter().all(|course| course.is_active));
        assert!(courses.iter().all(|course| course.instructor.is_some()));
    }

    #[test]
    fn marketing_category_selects_exactly_course_two() {
        let store = fixtures::seeded();
        let courses = store.list(CatalogKind::Courses).unwrap();

        let filter = QueryFilter::new().axis("category", "Marketing");
        let result = query::query(query::schema(CatalogKind::Courses), &courses, &filter);
        assert_eq!(ids(&result), [2]);
    }

    #[test]
    fn equipos_search_selects_courses_three_and_five_in_order() {
        let store = fixtures::seeded();
        let courses = store.list(CatalogKind::Courses).unwrap();

        let filter = QueryFilter::new().search("equipos");
        let result = query::query(query::schema(CatalogKind::Courses), &courses, &filter);
        assert_eq!(ids(&result), [3, 5]);
    }

    #[test]
    fn intermediate_level_selects_courses_one_four_five() {
        let store = fixtures::seeded();
        let courses = store.list(CatalogKind::Courses).unwrap();

        let filter = QueryFilter::new()
            .axis("category", "Todas")
            .axis("level", "Intermedio");
        let result = query::query(query::schema(CatalogKind::Courses), &courses, &filter);
        assert_eq!(ids(&result), [1, 4, 5]);
    }

    #[test]
    fn sector_wide_resources_show_up_for_every_sector() {
        let store = fixtures::seeded();
        let resources = store.list(CatalogKind::Resources).unwrap();

        let filter = QueryFilter::new().axis("sector", "Comercio");
        let result = query::query(query::schema(CatalogKind::Resources), &resources, &filter);
        // Crédito Mipyme plus the two sector-"Todos" entries.
        assert_eq!(ids(&result), [1, 2, 4]);
    }
}
