//! Role-based job checklists and their completions.

use serde::{Deserialize, Serialize};

/// A single item on a role checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    /// Stable identifier recorded in completions.
    pub id: &'static str,
    /// Text shown to the crew member.
    pub label: &'static str,
}

const fn item(id: &'static str, label: &'static str) -> ChecklistItem {
    ChecklistItem { id, label }
}

/// Driver checklist.
pub const DRIVER_CHECKLIST: &[ChecklistItem] = &[
    item("truck_clean", "Truck clean from previous trip"),
    item("truck_supplied", "Truck supplied per Standard Supplies"),
    item("trash_removed", "Trash removed from truck"),
    item("truck_swept", "Back of truck swept/blown out"),
    item("cab_cleaned", "Cab cleaned (seats, dashboard, windshield, floors)"),
    item("dot_inspection", "DOT Pre-Trip inspection completed"),
    item("courtesy_call", "Courtesy call to customer when departing"),
    item("spotter_used", "Used spotter when backing at destination"),
];

/// Crew lead checklist.
pub const LEAD_CHECKLIST: &[ChecklistItem] = &[
    item("greeted_customer", "Greeted customer with handshake"),
    item("introduced_crew", "Introduced all crew members"),
    item("identified_contact", "Identified self as primary contact"),
    item("walkthrough_team", "Performed walkthrough with full team"),
    item("labeled_rooms", "Labeled rooms with painter's tape"),
    item("documented_damages", "Documented pre-existing damages with photos"),
    item("assigned_roles", "Assigned roles to crew"),
    item("final_walkthrough_pickup", "Final walkthrough with customer at pickup"),
    item(
        "final_walkthrough_destination",
        "Final walkthrough with customer at destination",
    ),
    item("provided_cards", "Provided business cards"),
    item("asked_review", "Asked for review"),
    item("completed_billing", "Completed billing/invoice"),
];

/// Helper checklist.
pub const HELPER_CHECKLIST: &[ChecklistItem] = &[
    item("greeted_customer", "Greeted customer with handshake"),
    item("participated_walkthrough", "Participated in walkthrough"),
    item("pad_wrapped", "Pad-wrapped all furniture (100% covered)"),
    item(
        "shrink_wrapped_light",
        "Shrink-wrapped white/light furniture before padding",
    ),
    item("hardware_labeled", "Labeled disassembly hardware in ziplock"),
    item("fragile_labeled", "Labeled fragile items"),
    item(
        "floor_protection",
        "Installed floor protection & door jamb protectors",
    ),
    item("pads_folded", "Folded pads on-site"),
    item("final_check", "Final walkthrough for items/trash/tools"),
    item("thanked_customer", "Thanked customer with handshake"),
];

/// The role a crew member filled on a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrewRole {
    /// Drove the truck.
    Driver,
    /// Led the crew.
    Lead,
    /// Helped load and unload.
    Helper,
}

impl CrewRole {
    /// Returns the checklist a crew member in this role must complete.
    pub fn checklist(self) -> &'static [ChecklistItem] {
        match self {
            CrewRole::Driver => DRIVER_CHECKLIST,
            CrewRole::Lead => LEAD_CHECKLIST,
            CrewRole::Helper => HELPER_CHECKLIST,
        }
    }
}

/// The checklist items a crew member ticked off on one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistCompletion {
    /// Unique identifier for the completion.
    pub id: String,
    /// The job the checklist was for.
    pub job_id: String,
    /// The crew member who completed it.
    pub employee_id: String,
    /// The role they filled on the job.
    pub role: CrewRole,
    /// IDs of the items they ticked off.
    #[serde(default)]
    pub items_completed: Vec<String>,
}

impl ChecklistCompletion {
    /// Returns true if every item of the role's checklist was ticked off.
    ///
    /// Unknown item IDs are ignored.
    pub fn is_complete(&self) -> bool {
        self.role
            .checklist()
            .iter()
            .all(|item| self.items_completed.iter().any(|done| done == item.id))
    }
}
