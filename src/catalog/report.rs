//! Block catalog for SWMM report files
//!
//! Report blocks are titled free-text headers followed by a fixed,
//! version-dependent number of underline and unit rows. Column names are
//! unit-dependent for nearly every block, so the fixed sets here come in
//! CFS/LPS pairs resolved through [columns].

// internal modules
use crate::catalog::{Descriptor, FormatVersion, UnitFamily};
use crate::table::ColumnType::{self, Auto, Text};

/// End-of-block sentinel: report blocks terminate on a line ending in two
/// spaces before the newline
pub const SENTINEL: &str = "  \n";

/// Every report block this crate knows how to locate
pub static BLOCKS: &[Descriptor] = &[
    Descriptor::new("element_count", "Element Count", 2).special(),
    Descriptor::new("raingage_summary", "Raingage Summary", 5),
    Descriptor::new("subcatchment_summary", "Subcatchment Summary", 5),
    Descriptor::new("node_summary", "Node Summary", 5),
    Descriptor::new("link_summary", "Link Summary", 4),
    Descriptor::new("cross_section_summary", "Cross Section Summary", 5),
    Descriptor::new("runoff_quantity_continuity", "Runoff Quantity Continuity", 0).special(),
    Descriptor::new("flow_routing_continuity", "Flow Routing Continuity", 0).special(),
    Descriptor::new("subcatchment_runoff_results", "Subcatchment Runoff Summary", 8),
    Descriptor::new("node_depth_results", "Node Depth Summary", 8),
    Descriptor::new("node_inflow_results", "Node Inflow Summary", 9),
    Descriptor::new("node_surcharge_results", "Node Surcharge Summary", 9),
    Descriptor::new("node_flooding_results", "Node Flooding Summary", 10),
    Descriptor::new("storage_volume_results", "Storage Volume Summary", 8),
    Descriptor::new("outfall_loading_results", "Outfall Loading Summary", 8)
        .inferred(3, 3)
        .fuse_index_pair()
        .drop_separator_rows(),
    Descriptor::new("link_flow_results", "Link Flow Summary", 8),
    Descriptor::new("flow_classification_results", "Flow Classification Summary", 8),
    Descriptor::new("conduit_surcharge_results", "Conduit Surcharge Summary", 8),
    Descriptor::new("link_pollutant_load_results", "Link Pollutant Load Summary", 7)
        .inferred(3, 2),
];

/// Row keys given to the element-count listing once parsed
pub const ELEMENT_COUNT_LABELS: &[&str] = &[
    "Rain_gages",
    "Subcatchments",
    "Nodes",
    "Links",
    "Pollutants",
    "Land_uses",
];

/// Continuity rows: report label paired with the output row key
pub type ContinuityRow = (&'static str, &'static str);

/// Rows of the runoff quantity continuity block, in file order
pub const RUNOFF_CONTINUITY_ROWS: &[ContinuityRow] = &[
    ("Total Precipitation", "Total_Precipitation"),
    ("Evaporation Loss", "Evaporation_Loss"),
    ("Infiltration Loss", "Infiltration_Loss"),
    ("Surface Runoff", "Surface_Runoff"),
    ("Final Storage", "Final_Storage"),
    ("Continuity Error (%)", "Continuity_Error_pcnt"),
];

/// Rows of the flow routing continuity block, in file order
pub const ROUTING_CONTINUITY_ROWS: &[ContinuityRow] = &[
    ("Dry Weather Inflow", "Dry_Weather_Inflow"),
    ("Wet Weather Inflow", "Wet_Weather_Inflow"),
    ("Groundwater Inflow", "Groundwater_Inflow"),
    ("RDII Inflow", "RDII_Inflow"),
    ("External Inflow", "External_Inflow"),
    ("External Outflow", "External_Outflow"),
    ("Flooding Loss", "Flooding_Loss"),
    ("Evaporation Loss", "Evaporation_Loss"),
    ("Exfiltration Loss", "Exfiltration_Loss"),
    ("Initial Stored Volume", "Initial_Stored_Volume"),
    ("Final Stored Volume", "Final_Stored_Volume"),
    ("Continuity Error (%)", "Continuity_Error_pcnt"),
];

/// Column pair used by both continuity blocks
pub const fn continuity_columns(units: UnitFamily) -> [&'static str; 2] {
    match units {
        UnitFamily::Cfs => ["Volume_acre_feet", "Depth_inches"],
        UnitFamily::Lps => ["Volume_hectare_feet", "Depth_mm"],
    }
}

type Columns = &'static [(&'static str, ColumnType)];

/// Resolve the fixed column set for a report block
///
/// Returns `None` for blocks with inferred or special columns, and for
/// names not in the catalog. The subcatchment runoff summary is the one
/// known layout change between format versions: 5.1 added the runon column.
pub fn columns(name: &str, units: UnitFamily, version: FormatVersion) -> Option<Columns> {
    let set = match (name, units) {
        ("raingage_summary", _) => RAINGAGE_SUMMARY,
        ("subcatchment_summary", _) => SUBCATCHMENT_SUMMARY,
        ("node_summary", _) => NODE_SUMMARY,
        ("link_summary", _) => LINK_SUMMARY,
        ("cross_section_summary", _) => CROSS_SECTION_SUMMARY,
        ("subcatchment_runoff_results", UnitFamily::Cfs) => {
            if version >= FormatVersion::V5_1 {
                SUBCATCHMENT_RUNOFF_CFS
            } else {
                SUBCATCHMENT_RUNOFF_CFS_LEGACY
            }
        }
        ("subcatchment_runoff_results", UnitFamily::Lps) => {
            if version >= FormatVersion::V5_1 {
                SUBCATCHMENT_RUNOFF_LPS
            } else {
                SUBCATCHMENT_RUNOFF_LPS_LEGACY
            }
        }
        ("node_depth_results", UnitFamily::Cfs) => NODE_DEPTH_CFS,
        ("node_depth_results", UnitFamily::Lps) => NODE_DEPTH_LPS,
        ("node_inflow_results", UnitFamily::Cfs) => NODE_INFLOW_CFS,
        ("node_inflow_results", UnitFamily::Lps) => NODE_INFLOW_LPS,
        ("node_surcharge_results", UnitFamily::Cfs) => NODE_SURCHARGE_CFS,
        ("node_surcharge_results", UnitFamily::Lps) => NODE_SURCHARGE_LPS,
        ("node_flooding_results", UnitFamily::Cfs) => NODE_FLOODING_CFS,
        ("node_flooding_results", UnitFamily::Lps) => NODE_FLOODING_LPS,
        ("storage_volume_results", UnitFamily::Cfs) => STORAGE_VOLUME_CFS,
        ("storage_volume_results", UnitFamily::Lps) => STORAGE_VOLUME_LPS,
        ("link_flow_results", UnitFamily::Cfs) => LINK_FLOW_CFS,
        ("link_flow_results", UnitFamily::Lps) => LINK_FLOW_LPS,
        ("flow_classification_results", _) => FLOW_CLASSIFICATION,
        ("conduit_surcharge_results", _) => CONDUIT_SURCHARGE,
        _ => return None,
    };
    Some(set)
}

const RAINGAGE_SUMMARY: Columns = &[
    ("Name", Text),
    ("Data_Source", Auto),
    ("Data_Type", Auto),
    ("Recording_Interval_time", Auto),
    ("Recording_Interval_units", Auto),
];

const SUBCATCHMENT_SUMMARY: Columns = &[
    ("Name", Text),
    ("Area", Auto),
    ("Width", Auto),
    ("%Imperv", Auto),
    ("%Slope", Auto),
    ("Rain_Gage", Auto),
    ("Outlet", Auto),
];

const NODE_SUMMARY: Columns = &[
    ("Name", Text),
    ("Type", Auto),
    ("Invert_Elev", Auto),
    ("Max_Depth", Auto),
    ("Ponded_Area", Auto),
    ("External_Inflow", Auto),
];

const LINK_SUMMARY: Columns = &[
    ("Name", Text),
    ("From_Node", Auto),
    ("To_Node", Auto),
    ("Type", Auto),
    ("Length", Auto),
    ("%Slope", Auto),
    ("Roughness", Auto),
];

const CROSS_SECTION_SUMMARY: Columns = &[
    ("Conduit", Text),
    ("Shape", Auto),
    ("Full_Depth", Auto),
    ("Full_Area", Auto),
    ("Hyd_Rad", Auto),
    ("Max_Width", Auto),
    ("No_of_Barrels", Auto),
    ("Full_Flow", Auto),
];

const SUBCATCHMENT_RUNOFF_CFS: Columns = &[
    ("Subcatchment", Text),
    ("Total_Precip_in", Auto),
    ("Total_Runon_in", Auto),
    ("Total_Evap_in", Auto),
    ("Total_Infil_in", Auto),
    ("Imperv_Runoff_in", Auto),
    ("Perv_Runoff_in", Auto),
    ("Total_Runoff_in", Auto),
    ("Total_Runoff_mgal", Auto),
    ("Peak_Runoff_CFS", Auto),
    ("Runoff_Coeff", Auto),
];

// 5.0 reports predate runon reporting
const SUBCATCHMENT_RUNOFF_CFS_LEGACY: Columns = &[
    ("Subcatchment", Text),
    ("Total_Precip_in", Auto),
    ("Total_Evap_in", Auto),
    ("Total_Infil_in", Auto),
    ("Imperv_Runoff_in", Auto),
    ("Perv_Runoff_in", Auto),
    ("Total_Runoff_in", Auto),
    ("Total_Runoff_mgal", Auto),
    ("Peak_Runoff_CFS", Auto),
    ("Runoff_Coeff", Auto),
];

const SUBCATCHMENT_RUNOFF_LPS: Columns = &[
    ("Subcatchment", Text),
    ("Total_Precip_mm", Auto),
    ("Total_Runon_mm", Auto),
    ("Total_Evap_mm", Auto),
    ("Total_Infil_mm", Auto),
    ("Imperv_Runoff_mm", Auto),
    ("Perv_Runoff_mm", Auto),
    ("Total_Runoff_mm", Auto),
    ("Total_Runoff_mltr", Auto),
    ("Peak_Runoff_LPS", Auto),
    ("Runoff_Coeff", Auto),
];

const SUBCATCHMENT_RUNOFF_LPS_LEGACY: Columns = &[
    ("Subcatchment", Text),
    ("Total_Precip_mm", Auto),
    ("Total_Evap_mm", Auto),
    ("Total_Infil_mm", Auto),
    ("Imperv_Runoff_mm", Auto),
    ("Perv_Runoff_mm", Auto),
    ("Total_Runoff_mm", Auto),
    ("Total_Runoff_mltr", Auto),
    ("Peak_Runoff_LPS", Auto),
    ("Runoff_Coeff", Auto),
];

const NODE_DEPTH_CFS: Columns = &[
    ("Node", Text),
    ("Type", Auto),
    ("Average_Depth_Feet", Auto),
    ("Maximum_Depth_Feet", Auto),
    ("Maximum_HGL_Feet", Auto),
    ("Time_of_Max_Occurrence_days", Auto),
    ("Time_of_Max_Occurrence_hours", Auto),
    ("Reported_Max_Depth_Feet", Auto),
];

const NODE_DEPTH_LPS: Columns = &[
    ("Node", Text),
    ("Type", Auto),
    ("Average_Depth_Meters", Auto),
    ("Maximum_Depth_Meters", Auto),
    ("Maximum_HGL_Meters", Auto),
    ("Time_of_Max_Occurrence_days", Auto),
    ("Time_of_Max_Occurrence_hours", Auto),
    ("Reported_Max_Depth_Meters", Auto),
];

const NODE_INFLOW_CFS: Columns = &[
    ("Node", Text),
    ("Type", Auto),
    ("Maximum_Lateral_Inflow_CFS", Auto),
    ("Maximum_Total_Inflow_CFS", Auto),
    ("Time_of_Max_Occurrence_days", Auto),
    ("Time_of_Max_Occurrence_hours", Auto),
    ("Lateral_Inflow_Volume_mgals", Auto),
    ("Total_Inflow_Volume_mgals", Auto),
    ("Flow_Balance_Error_Percent", Auto),
    ("flag", Auto),
];

const NODE_INFLOW_LPS: Columns = &[
    ("Node", Text),
    ("Type", Auto),
    ("Maximum_Lateral_Inflow_LPS", Auto),
    ("Maximum_Total_Inflow_LPS", Auto),
    ("Time_of_Max_Occurrence_days", Auto),
    ("Time_of_Max_Occurrence_hours", Auto),
    ("Lateral_Inflow_Volume_mltr", Auto),
    ("Total_Inflow_Volume_mltr", Auto),
    ("Flow_Balance_Error_Percent", Auto),
    ("flag", Auto),
];

const NODE_SURCHARGE_CFS: Columns = &[
    ("Node", Text),
    ("Type", Auto),
    ("Hours_Surcharged", Auto),
    ("Max_Height_Above_Crown_Feet", Auto),
    ("Min_Depth_Below_Rim_Feet", Auto),
];

const NODE_SURCHARGE_LPS: Columns = &[
    ("Node", Text),
    ("Type", Auto),
    ("Hours_Surcharged", Auto),
    ("Max_Height_Above_Crown_Meters", Auto),
    ("Min_Depth_Below_Rim_Meters", Auto),
];

const NODE_FLOODING_CFS: Columns = &[
    ("Node", Text),
    ("Hours_Flooded", Auto),
    ("Maximum_Rate_CFS", Auto),
    ("Time_of_Max_Occurrence_days", Auto),
    ("Time_of_Max_Occurrence_hours", Auto),
    ("Total_Flood_Volume_mgal", Auto),
    ("Maximum_Ponded_Depth_Feet", Auto),
];

const NODE_FLOODING_LPS: Columns = &[
    ("Node", Text),
    ("Hours_Flooded", Auto),
    ("Maximum_Rate_LPS", Auto),
    ("Time_of_Max_Occurrence_days", Auto),
    ("Time_of_Max_Occurrence_hours", Auto),
    ("Total_Flood_Volume_mltr", Auto),
    ("Maximum_Ponded_Depth_Meters", Auto),
];

const STORAGE_VOLUME_CFS: Columns = &[
    ("Storage_Unit", Text),
    ("Average_Volume_1000_ft3", Auto),
    ("Avg_Pcnt_Full", Auto),
    ("Evap_Pcnt_Loss", Auto),
    ("Exfil_Pcnt_Loss", Auto),
    ("Maximum_Volume_1000_ft3", Auto),
    ("Max_Pcnt_Full", Auto),
    ("Time_of_Max_Occurrence_days", Auto),
    ("Time_of_Max_Occurrence_hours", Auto),
    ("Maximum_Outflow_CFS", Auto),
];

const STORAGE_VOLUME_LPS: Columns = &[
    ("Storage_Unit", Text),
    ("Average_Volume_1000_m3", Auto),
    ("Avg_Pcnt_Full", Auto),
    ("Evap_Pcnt_Loss", Auto),
    ("Exfil_Pcnt_Loss", Auto),
    ("Maximum_Volume_1000_m3", Auto),
    ("Max_Pcnt_Full", Auto),
    ("Time_of_Max_Occurrence_days", Auto),
    ("Time_of_Max_Occurrence_hours", Auto),
    ("Maximum_Outflow_LPS", Auto),
];

const LINK_FLOW_CFS: Columns = &[
    ("Link", Text),
    ("Type", Auto),
    ("Maximum_Flow_CFS", Auto),
    ("Time_of_Max_Occurrence_days", Auto),
    ("Time_of_Max_Occurrence_hours", Auto),
    ("Maximum_Veloc_ftsec", Auto),
    ("Max_Full_Flow", Auto),
    ("Max_Full_Depth", Auto),
];

const LINK_FLOW_LPS: Columns = &[
    ("Link", Text),
    ("Type", Auto),
    ("Maximum_Flow_LPS", Auto),
    ("Time_of_Max_Occurrence_days", Auto),
    ("Time_of_Max_Occurrence_hours", Auto),
    ("Maximum_Veloc_msec", Auto),
    ("Max_Full_Flow", Auto),
    ("Max_Full_Depth", Auto),
];

const FLOW_CLASSIFICATION: Columns = &[
    ("Conduit", Text),
    ("Adjusted_Actual_Length", Auto),
    ("Fraction_of_Time_Dry", Auto),
    ("Fraction_of_Time_Up_Dry", Auto),
    ("Fraction_of_Time_Down_Dry", Auto),
    ("Fraction_of_Time_Sub_Crit", Auto),
    ("Fraction_of_Time_Sup_Crit", Auto),
    ("Fraction_of_Time_Up_Crit", Auto),
    ("Fraction_of_Time_Down_Crit", Auto),
    ("Fraction_of_Time_Norm_Ltd", Auto),
    ("Fraction_of_Time_Inlet_Ctrl", Auto),
];

const CONDUIT_SURCHARGE: Columns = &[
    ("Conduit", Text),
    ("Hours_Full_Both_Ends", Auto),
    ("Hours_Full_Upstream", Auto),
    ("Hours_Full_Dnstream", Auto),
    ("Hours_Above_Full_Normal_Flow", Auto),
    ("Hours_Capacity_Limited", Auto),
];
