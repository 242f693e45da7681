//! Console sections reachable from the sidebar.
//!
//! Each section names the permission the backend grants for it; the route
//! table, sidebar and dashboard all read from this one list.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use super::permissions::PermissionSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Usuarios,
    Movimientos,
    Paquetes,
    Reservas,
    Visitas,
    VisitasProgramadas,
    Menus,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Usuarios,
        Section::Movimientos,
        Section::Paquetes,
        Section::Reservas,
        Section::Visitas,
        Section::VisitasProgramadas,
        Section::Menus,
    ];

    /// Client route.
    pub fn path(self) -> &'static str {
        match self {
            Self::Usuarios => "/usuarios",
            Self::Movimientos => "/movimientos",
            Self::Paquetes => "/paquetes",
            Self::Reservas => "/reservas",
            Self::Visitas => "/visitas",
            Self::VisitasProgramadas => "/visitas-programadas",
            Self::Menus => "/menus",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Usuarios => "Usuarios",
            Self::Movimientos => "Movimientos de acceso",
            Self::Paquetes => "Paquetes",
            Self::Reservas => "Reservas de espacios comunes",
            Self::Visitas => "Registro de visitas",
            Self::VisitasProgramadas => "Visitas programadas",
            Self::Menus => "Menús y permisos",
        }
    }

    /// Permission name as it appears in the login permission tree.
    pub fn required_permission(self) -> &'static str {
        match self {
            Self::Usuarios => "Lista de Usuarios",
            Self::Movimientos => "Movimientos",
            Self::Paquetes => "Paquetes",
            Self::Reservas => "Reservas",
            Self::Visitas => "Registro de Visitas",
            Self::VisitasProgramadas => "Visitas Programadas",
            Self::Menus => "Menús",
        }
    }

    /// REST collection listed by the section page.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Usuarios => "/usuarios",
            Self::Movimientos => "/movimientos",
            Self::Paquetes => "/paquetes",
            Self::Reservas => "/reservas",
            Self::Visitas => "/visitas",
            Self::VisitasProgramadas => "/visitas-programadas",
            Self::Menus => "/menus",
        }
    }
}

/// Sections the permission set opens, in sidebar order.
pub fn permitted_sections(permissions: &PermissionSet) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|s| permissions.allows(s.required_permission()))
        .collect()
}
