//! Static role policy.
//!
//! The table is total over [`Role`]: every role has a non-empty slice and the
//! mapping never changes at runtime. Authorization here is a pure lookup.
//! - No IO
//! - No panics
//! - Default-deny: anything not granted is refused

use crate::{Permission, Role};

const CLIENT_PERMISSIONS: &[Permission] = &[
    Permission::NavAppointments,
    Permission::NavInvoices,
    Permission::NavReviews,
];

const EMPLOYEE_PERMISSIONS: &[Permission] = &[
    Permission::NavAppointments,
    Permission::NavCalendar,
    Permission::NavClients,
    Permission::NavCustomers,
    Permission::NavServices,
    Permission::NavProducts,
];

const RECEPTIONIST_PERMISSIONS: &[Permission] = &[
    Permission::NavAppointments,
    Permission::NavCalendar,
    Permission::NavClients,
    Permission::NavCustomers,
    Permission::NavServices,
    Permission::NavProducts,
    Permission::NavInvoices,
    Permission::NavEmails,
    Permission::NavCommunication,
];

/// Admins hold the full set, including the admin dashboard.
const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::NavAppointments,
    Permission::NavInvoices,
    Permission::NavReviews,
    Permission::NavClients,
    Permission::NavEmployees,
    Permission::NavProducts,
    Permission::NavEmails,
    Permission::NavCalendar,
    Permission::NavCustomers,
    Permission::NavStatistics,
    Permission::NavCommunication,
    Permission::NavServices,
    Permission::NavSettings,
    Permission::DashboardAdmin,
];

/// Exactly the permission set configured for `role`, no duplicates.
pub fn permissions_for(role: Role) -> &'static [Permission] {
    match role {
        Role::Client => CLIENT_PERMISSIONS,
        Role::Employee => EMPLOYEE_PERMISSIONS,
        Role::Receptionist => RECEPTIONIST_PERMISSIONS,
        Role::Admin => ADMIN_PERMISSIONS,
    }
}

/// Whether `role` holds `permission`.
///
/// An absent role always denies. This is the security-critical default: a
/// session whose role could not be resolved gets no capabilities at all.
pub fn can(role: Option<Role>, permission: Permission) -> bool {
    match role {
        Some(role) => permissions_for(role).contains(&permission),
        None => false,
    }
}
