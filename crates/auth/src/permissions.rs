use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capability tag gating access to a panel route or navigation entry.
///
/// The set is closed and versioned with the route declarations: every
/// protected route names one of these, and the policy table maps roles onto
/// them. Wire form is the `area:resource` string (e.g. `nav:invoices`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "nav:appointments")]
    NavAppointments,
    #[serde(rename = "nav:invoices")]
    NavInvoices,
    #[serde(rename = "nav:reviews")]
    NavReviews,
    #[serde(rename = "nav:clients")]
    NavClients,
    #[serde(rename = "nav:employees")]
    NavEmployees,
    #[serde(rename = "nav:products")]
    NavProducts,
    #[serde(rename = "nav:emails")]
    NavEmails,
    #[serde(rename = "nav:calendar")]
    NavCalendar,
    #[serde(rename = "nav:customers")]
    NavCustomers,
    #[serde(rename = "nav:statistics")]
    NavStatistics,
    #[serde(rename = "nav:communication")]
    NavCommunication,
    #[serde(rename = "nav:services")]
    NavServices,
    #[serde(rename = "nav:settings")]
    NavSettings,
    #[serde(rename = "dashboard:admin")]
    DashboardAdmin,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 14] = [
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

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::NavAppointments => "nav:appointments",
            Permission::NavInvoices => "nav:invoices",
            Permission::NavReviews => "nav:reviews",
            Permission::NavClients => "nav:clients",
            Permission::NavEmployees => "nav:employees",
            Permission::NavProducts => "nav:products",
            Permission::NavEmails => "nav:emails",
            Permission::NavCalendar => "nav:calendar",
            Permission::NavCustomers => "nav:customers",
            Permission::NavStatistics => "nav:statistics",
            Permission::NavCommunication => "nav:communication",
            Permission::NavServices => "nav:services",
            Permission::NavSettings => "nav:settings",
            Permission::DashboardAdmin => "dashboard:admin",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown permission: {0:?}")]
pub struct PermissionParseError(pub String);

impl FromStr for Permission {
    type Err = PermissionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PermissionParseError(s.to_string()))
    }
}
