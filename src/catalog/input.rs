//! Block catalog for SWMM input files
//!
//! Input sections are delimited by bracketed uppercase tags and terminate
//! where the next bracketed tag begins, so the sentinel is simply `[`.
//! Markers match case-sensitively - the tags are literal tokens, and at
//! least one (`[Polygons]`) is written mixed-case by the GUI.
//!
//! Users can sprinkle `;` comments anywhere, so every section assumes a
//! fixed two-line skip straight to data and relies on comment filtering to
//! remove whatever annotation rows are actually present.

// internal modules
use crate::catalog::Descriptor;
use crate::table::ColumnType::{self, Auto, Real, Text};

/// End-of-section sentinel: the next bracketed tag
pub const SENTINEL: &str = "[";

/// Comment marker for input files
pub const COMMENT: char = ';';

/// Every input section card this crate has a descriptor for
///
/// Cards marked unimplemented need bespoke parsing (free text, multi-line
/// records) that nothing downstream has asked for yet; requesting one is
/// reported distinctly from requesting a card missing from this list.
pub static BLOCKS: &[Descriptor] = &[
    Descriptor::new("title", "[TITLE]", 2).unimplemented(),
    Descriptor::new("options", "[OPTIONS]", 2),
    Descriptor::new("evaporation", "[EVAPORATION]", 2),
    Descriptor::new("temperature", "[TEMPERATURE]", 2).unimplemented(),
    Descriptor::new("raingages", "[RAINGAGES]", 2),
    Descriptor::new("subcatchments", "[SUBCATCHMENTS]", 2),
    Descriptor::new("subareas", "[SUBAREAS]", 2),
    Descriptor::new("infiltration", "[INFILTRATION]", 2),
    Descriptor::new("lid_controls", "[LID_CONTROLS]", 2).unimplemented(),
    Descriptor::new("lid_usage", "[LID_USAGE]", 2).unimplemented(),
    Descriptor::new("aquifers", "[AQUIFERS]", 2).unimplemented(),
    Descriptor::new("groundwater", "[GROUNDWATER]", 2).unimplemented(),
    Descriptor::new("junctions", "[JUNCTIONS]", 2),
    Descriptor::new("outfalls", "[OUTFALLS]", 2),
    Descriptor::new("storage", "[STORAGE]", 2).take(5),
    Descriptor::new("dividers", "[DIVIDERS]", 2).take(4),
    Descriptor::new("conduits", "[CONDUITS]", 2),
    Descriptor::new("orifices", "[ORIFICES]", 2),
    Descriptor::new("outlets", "[OUTLETS]", 2),
    Descriptor::new("weirs", "[WEIRS]", 2),
    Descriptor::new("pumps", "[PUMPS]", 2).take(3),
    Descriptor::new("xsections", "[XSECTIONS]", 2),
    Descriptor::new("curves", "[CURVES]", 2).realign_short_rows(),
    Descriptor::new("transects", "[TRANSECTS]", 2).unimplemented(),
    Descriptor::new("losses", "[LOSSES]", 2),
    Descriptor::new("timeseries", "[TIMESERIES]", 2),
    Descriptor::new("report", "[REPORT]", 2),
    Descriptor::new("tags", "[TAGS]", 1),
    Descriptor::new("map", "[MAP]", 2).unimplemented(),
    Descriptor::new("coordinates", "[COORDINATES]", 2),
    Descriptor::new("vertices", "[VERTICES]", 2),
    Descriptor::new("polygons", "[Polygons]", 2),
    Descriptor::new("symbols", "[SYMBOLS]", 2),
    Descriptor::new("pollutants", "[POLLUTANTS]", 2),
    Descriptor::new("inflows", "[INFLOWS]", 2),
];

type Columns = &'static [(&'static str, ColumnType)];

/// Fixed column set for an implemented input card
pub fn columns(name: &str) -> Option<Columns> {
    let set: Columns = match name {
        "options" => &[("Option", Text), ("Value", Auto)],
        "evaporation" => &[("Data_Source", Text), ("Parameters", Auto)],
        "raingages" => &[
            ("Name", Text),
            ("Format", Auto),
            ("Interval", Auto),
            ("SCF", Auto),
            ("Source", Auto),
            ("Path", Auto),
        ],
        "subcatchments" => &[
            ("Name", Text),
            ("Rain_Gage", Text),
            ("Outlet", Text),
            ("Area", Auto),
            ("Pcnt_Imperv", Auto),
            ("Width", Auto),
            ("Pcnt_Slope", Auto),
            ("CurbLen", Auto),
            ("SnowPack", Auto),
        ],
        "subareas" => &[
            ("Subcatchment", Text),
            ("N_Imperv", Auto),
            ("N_Perv", Auto),
            ("S_Imperv", Auto),
            ("S_Perv", Auto),
            ("PctZero", Auto),
            ("RouteTo", Text),
            ("PctRouted", Auto),
        ],
        "infiltration" => &[
            ("Subcatchment", Text),
            ("Suction", Auto),
            ("HydCon", Auto),
            ("IMDmax", Auto),
        ],
        "junctions" => &[
            ("Name", Text),
            ("Invert_Elev", Auto),
            ("Max_Depth", Auto),
            ("Init_Depth", Auto),
            ("Surcharge_Depth", Auto),
            ("Ponded_Area", Auto),
        ],
        "outfalls" => &[
            ("Name", Text),
            ("Invert_Elev", Auto),
            ("Outfall_Type", Text),
            ("Stage_Table_Time_Series", Auto),
            ("Tide_Gate", Auto),
            ("Route_To", Auto),
        ],
        "storage" => &[
            ("Name", Text),
            ("Invert_Elev", Text),
            ("Max_Depth", Text),
            ("Init_Depth", Text),
            ("Storage_Curve", Text),
        ],
        "dividers" => &[
            ("Name", Text),
            ("Elevation", Text),
            ("Diverted_Link", Text),
            ("Type", Text),
        ],
        "conduits" => &[
            ("Name", Text),
            ("Inlet_Node", Text),
            ("Outlet_Node", Text),
            ("Length", Auto),
            ("Manning_N", Auto),
            ("Inlet_Offset", Auto),
            ("Outlet_Offset", Auto),
            ("Init_Flow", Auto),
            ("Max_Flow", Auto),
        ],
        "orifices" => &[
            ("Name", Text),
            ("From_Node", Text),
            ("To_Node", Text),
            ("Type", Text),
            ("Offset", Auto),
            ("Qcoeff", Auto),
            ("Gated", Auto),
            ("CloseTime", Auto),
        ],
        "outlets" => &[
            ("Name", Text),
            ("Inlet_Node", Text),
            ("Outlet_Node", Text),
            ("Outflow_Height", Auto),
            ("Outlet_Type", Auto),
            ("Qcoeff_QTable", Auto),
            ("Qexpon", Auto),
            ("Flap_Gate", Auto),
        ],
        "weirs" => &[
            ("Name", Text),
            ("From_Node", Text),
            ("To_Node", Text),
            ("Type", Text),
            ("CrestHt", Auto),
            ("Qcoeff", Auto),
            ("Gated", Auto),
            ("EndCon", Auto),
            ("EndCoeff", Auto),
            ("Surcharge", Auto),
            ("RoadWidth", Auto),
            ("RoadSurf", Auto),
        ],
        "pumps" => &[("Name", Text), ("From_Node", Text), ("To_Node", Text)],
        "xsections" => &[
            ("Link", Text),
            ("Shape", Auto),
            ("Geom1", Auto),
            ("Geom2", Auto),
            ("Geom3", Auto),
            ("Geom4", Auto),
            ("Barrels", Auto),
        ],
        "curves" => &[
            ("Name", Text),
            ("Type", Text),
            ("X_Value", Text),
            ("Y_Value", Text),
        ],
        "losses" => &[
            ("Link", Text),
            ("Inlet", Text),
            ("Outlet", Text),
            ("Average", Auto),
            ("Flap_Gate", Auto),
            ("SeepageRate", Auto),
        ],
        "timeseries" => &[
            ("Name", Text),
            ("Date", Auto),
            ("Time", Auto),
            ("Value", Auto),
        ],
        "report" => &[("Param", Text), ("Value", Auto)],
        "tags" => &[("Object", Text), ("Name", Text), ("Type", Auto)],
        "coordinates" => &[("Node", Text), ("X_Coord", Real), ("Y_Coord", Real)],
        "vertices" => &[("Link", Text), ("X_Coord", Real), ("Y_Coord", Real)],
        "polygons" => &[("Subcatchment", Text), ("X_Coord", Real), ("Y_Coord", Real)],
        "symbols" => &[("Gage", Text), ("X_Coord", Auto), ("Y_Coord", Auto)],
        "pollutants" => &[
            ("Name", Text),
            ("Units", Auto),
            ("Crain", Auto),
            ("Cgw", Auto),
            ("Crdii", Auto),
            ("Kdecay", Auto),
            ("SnowOnly", Auto),
            ("Co_Pollutant", Auto),
            ("Co_Frac", Auto),
            ("Cdwf", Auto),
            ("Cinit", Auto),
        ],
        "inflows" => &[
            ("Node", Text),
            ("Constituent", Auto),
            ("Time_Series", Auto),
            ("Type", Auto),
            ("Mfactor", Auto),
            ("Sfactor", Auto),
            ("Baseline", Auto),
            ("Pattern", Auto),
        ],
        _ => return None,
    };
    Some(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::descriptor;

    #[test]
    fn every_implemented_card_has_columns() {
        for block in BLOCKS {
            if block.implemented {
                assert!(
                    columns(block.name).is_some(),
                    "no column set for {}",
                    block.name
                );
            }
        }
    }

    #[test]
    fn unimplemented_cards_are_marked() {
        for name in ["title", "temperature", "transects", "map"] {
            assert!(!descriptor(BLOCKS, name).unwrap().implemented);
        }
    }

    #[test]
    fn markers_are_bracketed_tags() {
        for block in BLOCKS {
            assert!(block.marker.starts_with('[') && block.marker.ends_with(']'));
        }
    }

    #[test]
    fn field_caps_match_the_multi_format_cards() {
        assert_eq!(descriptor(BLOCKS, "pumps").unwrap().take, Some(3));
        assert_eq!(descriptor(BLOCKS, "storage").unwrap().take, Some(5));
        assert_eq!(descriptor(BLOCKS, "dividers").unwrap().take, Some(4));
    }
}
