//! Named triggers accepted by the transaction controller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A request to move the machine from one state to another.
///
/// Parameters (the selected product, the inserted coin, a cash supply) are
/// carried by the controller methods; the trigger only names the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    StartMaintenance,
    ReloadChange,
    AddProducts,
    UpdateCatalogue,
    EndMaintenance,
    Start,
    Cancel,
    Select,
    Insert,
    Checkout,
    Accept,
    /// Fired internally to leave a transient state.
    Advance,
}

impl Trigger {
    pub fn name(&self) -> &'static str {
        match self {
            Self::StartMaintenance => "start_maintenance",
            Self::ReloadChange => "reload_change",
            Self::AddProducts => "add_products",
            Self::UpdateCatalogue => "update_catalogue",
            Self::EndMaintenance => "end_maintenance",
            Self::Start => "start",
            Self::Cancel => "cancel",
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Checkout => "checkout",
            Self::Accept => "accept",
            Self::Advance => "advance",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
