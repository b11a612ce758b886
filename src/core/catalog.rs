use crate::domain::model::{CardSize, Service};
use once_cell::sync::Lazy;

fn service(id: u32, title: &str, description: &str, icon: &str, size: CardSize) -> Service {
    Service {
        id,
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        size,
    }
}

/// Catalog of offered services. Defined once at first access and read only
/// through copying accessors; callers never see the canonical vector.
static SERVICES_CATALOG: Lazy<Vec<Service>> = Lazy::new(|| {
    vec![
        service(
            1,
            "Reparación de PC y Notebooks",
            "Solución de problemas de hardware y software. Cambio de componentes dañados.",
            "M20 16V7a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v9m16 0H4m16 0 1.28 2.55a1 1 0 0 1-.9 1.45H3.62a1 1 0 0 1-.9-1.45L4 16",
            CardSize::Large,
        ),
        service(
            2,
            "Limpieza y Pasta Térmica",
            "Mantenimiento preventivo para óptimo rendimiento térmico.",
            "M22 12 A10 10 0 1 1 2 12 A10 10 0 1 1 22 12 M12 6 L12 12 L16 14",
            CardSize::Normal,
        ),
        service(
            3,
            "Asesoramiento Técnico",
            "Te ayudo a elegir los mejores componentes según tu presupuesto y necesidades.",
            "M12 2v20M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6",
            CardSize::Normal,
        ),
        service(
            4,
            "Armado de PC Personalizado",
            "Ensamblado profesional de tu PC gamer, workstation o de uso general.",
            "M5 3 H19 A2 2 0 0 1 21 5 V19 A2 2 0 0 1 19 21 H5 A2 2 0 0 1 3 19 V5 A2 2 0 0 1 5 3 Z M9 3 V21 M3 9 H21 M3 15 H21",
            CardSize::Large,
        ),
        service(
            5,
            "Instalación de Sistemas",
            "Windows o Linux adaptado a tu hardware. Drivers y optimización incluida.",
            "M3 3 H10 V12 H3 Z M14 3 H21 V8 H14 Z M14 12 H21 V21 H14 Z M3 16 H10 V21 H3 Z",
            CardSize::Normal,
        ),
        service(
            6,
            "Optimización y Actualización",
            "Mejorá el rendimiento de tu equipo. Upgrade de RAM, SSD y más.",
            "m12 19-7-7 7-7M19 12H5",
            CardSize::Normal,
        ),
        service(
            7,
            "Recuperación de Datos",
            "Rescate de información importante de discos dañados.",
            "M21 12a9 9 0 0 0-9-9 9.75 9.75 0 0 0-6.74 2.74L3 8M3 3v5h5M3 12a9 9 0 0 0 9 9 9.75 9.75 0 0 0 6.74-2.74L21 16M21 21v-5h-5",
            CardSize::Normal,
        ),
        service(
            8,
            "Diagnóstico de Fallas",
            "Identificación precisa del problema. Diagnóstico sin cargo.",
            "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z M14 2v6h6M16 13H8M16 17H8M10 9H8",
            CardSize::Normal,
        ),
    ]
});

/// Returns a fresh copy of every service, preserving definition order.
pub fn get_all() -> Vec<Service> {
    SERVICES_CATALOG.clone()
}

pub fn count() -> usize {
    SERVICES_CATALOG.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_returns_independent_copies() {
        let mut first = get_all();
        let second = get_all();

        assert_eq!(first, second);

        first[0].title = "mutated".to_string();
        assert_ne!(first[0].title, second[0].title);
        assert_eq!(get_all()[0].title, second[0].title);
    }

    #[test]
    fn test_count_matches_catalog_length() {
        assert_eq!(count(), get_all().len());
        assert!(count() > 0);
    }

    #[test]
    fn test_catalog_preserves_definition_order() {
        let ids: Vec<u32> = get_all().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
