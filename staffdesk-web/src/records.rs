//! Static content page datasets
//!
//! Every content page holds a fixed list of domain records and renders it
//! into a table or detail grid. Nothing here mutates, filters, or persists;
//! pages may assume the route group's role check already passed.

use serde::Serialize;

/// A record type that renders as one row of a listing page
pub trait TableRecord {
    /// Column headers, in render order
    fn columns() -> &'static [&'static str];

    /// One table row, aligned with `columns()`
    fn row(&self) -> Vec<String>;
}

// ---------------------------------------------------------------------------
// Inventory (data manager)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct InventoryItem {
    pub code: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub quantity: u32,
    pub unit_price: &'static str,
    pub updated_on: &'static str,
}

impl TableRecord for InventoryItem {
    fn columns() -> &'static [&'static str] {
        &["Code", "Item", "Category", "Quantity", "Unit price", "Updated"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.code.to_string(),
            self.name.to_string(),
            self.category.to_string(),
            self.quantity.to_string(),
            self.unit_price.to_string(),
            self.updated_on.to_string(),
        ]
    }
}

pub fn inventory_items() -> Vec<InventoryItem> {
    vec![
        InventoryItem { code: "INV-1001", name: "A4 copier paper (500 sheets)", category: "Stationery", quantity: 240, unit_price: "₹310", updated_on: "2024-03-02" },
        InventoryItem { code: "INV-1002", name: "Whiteboard marker set", category: "Stationery", quantity: 85, unit_price: "₹120", updated_on: "2024-03-02" },
        InventoryItem { code: "INV-1417", name: "HDMI cable 2m", category: "Electronics", quantity: 37, unit_price: "₹450", updated_on: "2024-02-27" },
        InventoryItem { code: "INV-1623", name: "Wireless mouse", category: "Electronics", quantity: 52, unit_price: "₹899", updated_on: "2024-02-21" },
        InventoryItem { code: "INV-2104", name: "Office chair cushion", category: "Furniture", quantity: 18, unit_price: "₹1,250", updated_on: "2024-01-30" },
        InventoryItem { code: "INV-2330", name: "Desk organiser tray", category: "Furniture", quantity: 44, unit_price: "₹540", updated_on: "2024-02-14" },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub item_count: u32,
}

impl TableRecord for ItemCategory {
    fn columns() -> &'static [&'static str] {
        &["Category", "Description", "Items"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.to_string(),
            self.description.to_string(),
            self.item_count.to_string(),
        ]
    }
}

pub fn item_categories() -> Vec<ItemCategory> {
    vec![
        ItemCategory { name: "Stationery", description: "Paper, pens, markers, and desk supplies", item_count: 2 },
        ItemCategory { name: "Electronics", description: "Cables, peripherals, and small devices", item_count: 2 },
        ItemCategory { name: "Furniture", description: "Chairs, desks, and accessories", item_count: 2 },
    ]
}

// ---------------------------------------------------------------------------
// Attendance (admin and employee views)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRecord {
    pub employee: &'static str,
    pub date: &'static str,
    pub check_in: &'static str,
    pub check_out: &'static str,
    pub status: &'static str,
}

impl TableRecord for AttendanceRecord {
    fn columns() -> &'static [&'static str] {
        &["Employee", "Date", "Check in", "Check out", "Status"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.employee.to_string(),
            self.date.to_string(),
            self.check_in.to_string(),
            self.check_out.to_string(),
            self.status.to_string(),
        ]
    }
}

pub fn staff_attendance() -> Vec<AttendanceRecord> {
    vec![
        AttendanceRecord { employee: "Kavya Iyer", date: "2024-03-04", check_in: "09:05", check_out: "18:02", status: "Present" },
        AttendanceRecord { employee: "Ravi Narayan", date: "2024-03-04", check_in: "09:31", check_out: "18:20", status: "Present" },
        AttendanceRecord { employee: "Sunita Rao", date: "2024-03-04", check_in: "—", check_out: "—", status: "On leave" },
        AttendanceRecord { employee: "Arjun Menon", date: "2024-03-04", check_in: "08:52", check_out: "17:45", status: "Present" },
        AttendanceRecord { employee: "Kavya Iyer", date: "2024-03-05", check_in: "09:12", check_out: "18:10", status: "Present" },
        AttendanceRecord { employee: "Ravi Narayan", date: "2024-03-05", check_in: "10:04", check_out: "18:35", status: "Late" },
    ]
}

/// The employee page shows a single person's rows
pub fn own_attendance() -> Vec<AttendanceRecord> {
    vec![
        AttendanceRecord { employee: "Kavya Iyer", date: "2024-03-01", check_in: "09:02", check_out: "18:00", status: "Present" },
        AttendanceRecord { employee: "Kavya Iyer", date: "2024-03-04", check_in: "09:05", check_out: "18:02", status: "Present" },
        AttendanceRecord { employee: "Kavya Iyer", date: "2024-03-05", check_in: "09:12", check_out: "18:10", status: "Present" },
        AttendanceRecord { employee: "Kavya Iyer", date: "2024-03-06", check_in: "—", check_out: "—", status: "On leave" },
    ]
}

// ---------------------------------------------------------------------------
// Assets (admin)
// ---------------------------------------------------------------------------

/// Asset types with a dedicated detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssetKind {
    Laptop,
    Phone,
    Monitor,
}

impl AssetKind {
    pub fn all() -> [AssetKind; 3] {
        [AssetKind::Laptop, AssetKind::Phone, AssetKind::Monitor]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Laptop => "Laptop",
            AssetKind::Phone => "Phone",
            AssetKind::Monitor => "Monitor",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Laptop => write!(f, "laptop"),
            AssetKind::Phone => write!(f, "phone"),
            AssetKind::Monitor => write!(f, "monitor"),
        }
    }
}

impl std::str::FromStr for AssetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "laptop" => Ok(AssetKind::Laptop),
            "phone" => Ok(AssetKind::Phone),
            "monitor" => Ok(AssetKind::Monitor),
            _ => Err(format!("Unknown asset kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssetAssignment {
    pub asset_tag: &'static str,
    pub kind: AssetKind,
    pub model: &'static str,
    pub assigned_to: &'static str,
    pub assigned_on: &'static str,
    pub condition: &'static str,
}

impl TableRecord for AssetAssignment {
    fn columns() -> &'static [&'static str] {
        &["Tag", "Type", "Model", "Assigned to", "Assigned on", "Condition"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.asset_tag.to_string(),
            self.kind.label().to_string(),
            self.model.to_string(),
            self.assigned_to.to_string(),
            self.assigned_on.to_string(),
            self.condition.to_string(),
        ]
    }
}

pub fn asset_assignments() -> Vec<AssetAssignment> {
    vec![
        AssetAssignment { asset_tag: "AST-L-014", kind: AssetKind::Laptop, model: "ThinkPad T14 Gen 4", assigned_to: "Kavya Iyer", assigned_on: "2023-11-20", condition: "Good" },
        AssetAssignment { asset_tag: "AST-L-019", kind: AssetKind::Laptop, model: "MacBook Air M2", assigned_to: "Ravi Narayan", assigned_on: "2024-01-08", condition: "New" },
        AssetAssignment { asset_tag: "AST-P-031", kind: AssetKind::Phone, model: "Pixel 7a", assigned_to: "Sunita Rao", assigned_on: "2023-09-14", condition: "Good" },
        AssetAssignment { asset_tag: "AST-P-036", kind: AssetKind::Phone, model: "iPhone 13", assigned_to: "Arjun Menon", assigned_on: "2023-06-02", condition: "Worn" },
        AssetAssignment { asset_tag: "AST-M-042", kind: AssetKind::Monitor, model: "Dell U2723QE 27\"", assigned_to: "Kavya Iyer", assigned_on: "2023-11-20", condition: "Good" },
        AssetAssignment { asset_tag: "AST-M-047", kind: AssetKind::Monitor, model: "LG 27UP850 27\"", assigned_to: "Meera Pillai", assigned_on: "2024-02-12", condition: "New" },
    ]
}

/// Assignments of one asset type, for the per-type detail page
pub fn assets_of_kind(kind: AssetKind) -> Vec<AssetAssignment> {
    asset_assignments()
        .into_iter()
        .filter(|a| a.kind == kind)
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct AssetCategory {
    pub name: &'static str,
    pub tracked_units: u32,
    pub replacement_cycle: &'static str,
}

impl TableRecord for AssetCategory {
    fn columns() -> &'static [&'static str] {
        &["Category", "Tracked units", "Replacement cycle"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.to_string(),
            self.tracked_units.to_string(),
            self.replacement_cycle.to_string(),
        ]
    }
}

pub fn asset_categories() -> Vec<AssetCategory> {
    vec![
        AssetCategory { name: "Laptops", tracked_units: 2, replacement_cycle: "4 years" },
        AssetCategory { name: "Phones", tracked_units: 2, replacement_cycle: "3 years" },
        AssetCategory { name: "Monitors", tracked_units: 2, replacement_cycle: "6 years" },
    ]
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct StockLevel {
    pub item: &'static str,
    pub on_hand: u32,
    pub reorder_level: u32,
    pub location: &'static str,
}

impl TableRecord for StockLevel {
    fn columns() -> &'static [&'static str] {
        &["Item", "On hand", "Reorder level", "Location"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.item.to_string(),
            self.on_hand.to_string(),
            self.reorder_level.to_string(),
            self.location.to_string(),
        ]
    }
}

pub fn stock_levels() -> Vec<StockLevel> {
    vec![
        StockLevel { item: "A4 copier paper (500 sheets)", on_hand: 240, reorder_level: 100, location: "Rack A1" },
        StockLevel { item: "Whiteboard marker set", on_hand: 85, reorder_level: 40, location: "Rack A3" },
        StockLevel { item: "HDMI cable 2m", on_hand: 37, reorder_level: 25, location: "Rack C2" },
        StockLevel { item: "Wireless mouse", on_hand: 52, reorder_level: 30, location: "Rack C4" },
        StockLevel { item: "Desk organiser tray", on_hand: 44, reorder_level: 20, location: "Rack D1" },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct GoodsInwardEntry {
    pub grn_number: &'static str,
    pub supplier: &'static str,
    pub item: &'static str,
    pub quantity: u32,
    pub received_on: &'static str,
}

impl TableRecord for GoodsInwardEntry {
    fn columns() -> &'static [&'static str] {
        &["GRN", "Supplier", "Item", "Quantity", "Received"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.grn_number.to_string(),
            self.supplier.to_string(),
            self.item.to_string(),
            self.quantity.to_string(),
            self.received_on.to_string(),
        ]
    }
}

pub fn goods_inward_register() -> Vec<GoodsInwardEntry> {
    vec![
        GoodsInwardEntry { grn_number: "GRN-2024-031", supplier: "Sharma Paper Mart", item: "A4 copier paper (500 sheets)", quantity: 120, received_on: "2024-02-26" },
        GoodsInwardEntry { grn_number: "GRN-2024-032", supplier: "Techtonic Supplies", item: "Wireless mouse", quantity: 30, received_on: "2024-02-28" },
        GoodsInwardEntry { grn_number: "GRN-2024-033", supplier: "Techtonic Supplies", item: "HDMI cable 2m", quantity: 20, received_on: "2024-03-01" },
        GoodsInwardEntry { grn_number: "GRN-2024-034", supplier: "Urban Office Co.", item: "Desk organiser tray", quantity: 25, received_on: "2024-03-04" },
    ]
}

// ---------------------------------------------------------------------------
// Finance (admin / finance manager view)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ReimbursementEntry {
    pub claim_id: &'static str,
    pub employee: &'static str,
    pub category: &'static str,
    pub amount: &'static str,
    pub submitted_on: &'static str,
    pub status: &'static str,
}

impl TableRecord for ReimbursementEntry {
    fn columns() -> &'static [&'static str] {
        &["Claim", "Employee", "Category", "Amount", "Submitted", "Status"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.claim_id.to_string(),
            self.employee.to_string(),
            self.category.to_string(),
            self.amount.to_string(),
            self.submitted_on.to_string(),
            self.status.to_string(),
        ]
    }
}

pub fn reimbursement_ledger() -> Vec<ReimbursementEntry> {
    vec![
        ReimbursementEntry { claim_id: "RB-0211", employee: "Kavya Iyer", category: "Travel", amount: "₹2,340", submitted_on: "2024-02-19", status: "Approved" },
        ReimbursementEntry { claim_id: "RB-0212", employee: "Ravi Narayan", category: "Meals", amount: "₹780", submitted_on: "2024-02-22", status: "Approved" },
        ReimbursementEntry { claim_id: "RB-0213", employee: "Sunita Rao", category: "Travel", amount: "₹1,120", submitted_on: "2024-02-27", status: "Pending" },
        ReimbursementEntry { claim_id: "RB-0214", employee: "Arjun Menon", category: "Training", amount: "₹5,500", submitted_on: "2024-03-01", status: "Pending" },
    ]
}

// ---------------------------------------------------------------------------
// Leave options (employee)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct LeaveOption {
    pub code: &'static str,
    pub name: &'static str,
    pub days_per_year: u32,
    pub carry_forward: bool,
}

impl TableRecord for LeaveOption {
    fn columns() -> &'static [&'static str] {
        &["Code", "Leave type", "Days per year", "Carry forward"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.code.to_string(),
            self.name.to_string(),
            self.days_per_year.to_string(),
            if self.carry_forward { "Yes" } else { "No" }.to_string(),
        ]
    }
}

pub fn leave_options() -> Vec<LeaveOption> {
    vec![
        LeaveOption { code: "CL", name: "Casual leave", days_per_year: 12, carry_forward: false },
        LeaveOption { code: "SL", name: "Sick leave", days_per_year: 10, carry_forward: false },
        LeaveOption { code: "EL", name: "Earned leave", days_per_year: 18, carry_forward: true },
        LeaveOption { code: "WFH", name: "Work from home", days_per_year: 24, carry_forward: false },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_align_with_columns() {
        for item in inventory_items() {
            assert_eq!(item.row().len(), InventoryItem::columns().len());
        }
        for entry in reimbursement_ledger() {
            assert_eq!(entry.row().len(), ReimbursementEntry::columns().len());
        }
        for option in leave_options() {
            assert_eq!(option.row().len(), LeaveOption::columns().len());
        }
    }

    #[test]
    fn every_asset_kind_has_assignments() {
        for kind in AssetKind::all() {
            assert!(!assets_of_kind(kind).is_empty());
        }
    }

    #[test]
    fn asset_kind_parses_from_path_segment() {
        assert_eq!("laptop".parse::<AssetKind>().unwrap(), AssetKind::Laptop);
        assert!("printer".parse::<AssetKind>().is_err());
    }
}
