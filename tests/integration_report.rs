//! End-to-end extraction from a complete synthetic report file

use swmmtab::catalog::{FormatVersion, UnitFamily};
use swmmtab::document::Document;
use swmmtab::{read_report_block, ReportReader, Value};

use std::io::Write;

/// A CFS report with the banner, count, continuity, and summary blocks laid
/// out exactly as SWMM 5.1 writes them. Blocks terminate on a line holding
/// two spaces; the last block has no terminator and runs to end-of-file.
const REPORT: &str = concat!(
    "  EPA STORM WATER MANAGEMENT MODEL - VERSION 5.1 (Build 5.1.013)\n",
    "  --------------------------------------------------------------\n",
    "\n",
    "  Analysis Options\n",
    "  ****************\n",
    "  Flow Units ............... CFS\n",
    "  Infiltration Method ...... GREEN_AMPT\n",
    "  Routing Method ........... DYNWAVE\n",
    "  \n",
    "  *************\n",
    "  Element Count\n",
    "  *************\n",
    "  Number of rain gages ...... 1\n",
    "  Number of subcatchments ... 2\n",
    "  Number of nodes ........... 3\n",
    "  Number of links ........... 2\n",
    "  Number of pollutants ...... 1\n",
    "  Number of land uses ....... 0\n",
    "  \n",
    "  **************************        Volume         Depth\n",
    "  Runoff Quantity Continuity     acre-feet        inches\n",
    "  **************************     ---------       -------\n",
    "  Total Precipitation ......         0.452         3.000\n",
    "  Evaporation Loss ..........        0.000         0.000\n",
    "  Infiltration Loss .........        0.307         2.037\n",
    "  Surface Runoff ............        0.140         0.929\n",
    "  Final Storage .............        0.007         0.045\n",
    "  Continuity Error (%) .....        -0.219\n",
    "  \n",
    "  **************************        Volume        Volume\n",
    "  Flow Routing Continuity        acre-feet      10^6 gal\n",
    "  **************************     ---------     ---------\n",
    "  Dry Weather Inflow .......         0.000         0.000\n",
    "  Wet Weather Inflow .......         0.140         0.046\n",
    "  Groundwater Inflow .......         0.000         0.000\n",
    "  RDII Inflow ..............         0.000         0.000\n",
    "  External Inflow ..........         0.000         0.000\n",
    "  External Outflow .........         0.138         0.045\n",
    "  Flooding Loss ............         0.000         0.000\n",
    "  Evaporation Loss .........         0.010         0.003\n",
    "  Exfiltration Loss ........         0.000         0.000\n",
    "  Initial Stored Volume ....         0.000         0.000\n",
    "  Final Stored Volume ......         0.002         0.001\n",
    "  Continuity Error (%) .....        -0.159\n",
    "  \n",
    "  ***************************\n",
    "  Subcatchment Runoff Summary\n",
    "  ***************************\n",
    "\n",
    "  ------------------------------------------------------------------------------------------------------\n",
    "                            Total      Total      Total      Total     Imperv       Perv      Total       Total     Peak  Runoff\n",
    "                           Precip      Runon       Evap      Infil     Runoff     Runoff     Runoff      Runoff   Runoff   Coeff\n",
    "  Subcatchment                 in         in         in         in         in         in         in    10^6 gal      CFS\n",
    "  ------------------------------------------------------------------------------------------------------\n",
    "  S1                         3.00       0.00       0.00       2.04       0.00       0.93       0.93        0.25     1.21   0.310\n",
    "  S2                         3.00       0.00       0.00       2.07       0.00       0.90       0.90        0.23     1.10   0.300\n",
    "  \n",
    "  ******************\n",
    "  Node Depth Summary\n",
    "  ******************\n",
    "\n",
    "  ---------------------------------------------------------------------------------\n",
    "                                 Average  Maximum  Maximum  Time of Max    Reported\n",
    "                                   Depth    Depth      HGL   Occurrence   Max Depth\n",
    "  Node                 Type         Feet     Feet     Feet  days hr:min        Feet\n",
    "  ---------------------------------------------------------------------------------\n",
    "  J1                   JUNCTION     0.45     1.00    97.00     0  01:00        1.00\n",
    "  J2                   JUNCTION     0.30     0.80    90.80     0  01:05        0.80\n",
    "  O1                   OUTFALL      0.18     0.60    85.60     0  01:10        0.60\n",
    "  \n",
    "  ***********************\n",
    "  Outfall Loading Summary\n",
    "  ***********************\n",
    "\n",
    "  -----------------------------------------------\n",
    "                    Flow        Avg      Total\n",
    "                    Freq       Flow     Volume\n",
    "  Outfall Node      Pcnt        CFS   10^6 gal\n",
    "  -----------------------------------------------\n",
    "  O1                    58.17      0.03       0.42\n",
    "  18                    41.83      0.02       0.30\n",
    "  -----------------------------------------------\n",
    "  System               100.00      0.05       0.72\n",
    "  \n",
    "  ***************************\n",
    "  Link Pollutant Load Summary\n",
    "  ***************************\n",
    "\n",
    "  ----------------------------\n",
    "                         TSS\n",
    "  Link                   lbs\n",
    "  ----------------------------\n",
    "  C1                   12.38\n",
    "  C2                    8.51\n",
);

fn reader() -> ReportReader {
    ReportReader::from_document(Document::from_text(REPORT)).unwrap()
}

#[test]
fn banner_resolves_cfs_and_version() {
    let rpt = reader();
    assert_eq!(rpt.units(), UnitFamily::Cfs);
    assert_eq!(rpt.version(), FormatVersion::V5_1);
}

#[test]
fn node_depth_block_extracts_three_rows() {
    let mut rpt = reader();
    let table = rpt.table("node_depth_results").unwrap();

    assert_eq!(table.n_rows(), 3);
    assert_eq!(table.index_name(), Some("Node"));
    assert_eq!(table.columns().len(), 7);
    assert!(table.columns().iter().any(|c| c == "Average_Depth_Feet"));

    assert_eq!(table.index(), ["J1", "J2", "O1"]);
    assert_eq!(table.get(0, "Average_Depth_Feet"), Some(&Value::Real(0.45)));
    assert_eq!(table.get(2, "Maximum_HGL_Feet"), Some(&Value::Real(85.6)));
    // clock times never coerce to numbers
    assert_eq!(
        table.get(1, "Time_of_Max_Occurrence_hours"),
        Some(&Value::Text("01:05".into()))
    );
}

#[test]
fn element_count_rows_carry_canonical_keys() {
    let mut rpt = reader();
    let table = rpt.table("element_count").unwrap();

    assert_eq!(table.index().len(), 6);
    assert_eq!(
        table.row_by_key("Nodes"),
        Some(&[Value::Text("3".into())][..])
    );
    // counts stay text so nothing mangles identifiers downstream
    assert_eq!(table.columns(), ["num_elements"]);
}

#[test]
fn runoff_continuity_duplicates_the_error_value() {
    let mut rpt = reader();
    let table = rpt.table("runoff_quantity_continuity").unwrap();

    assert_eq!(table.columns(), ["Volume_acre_feet", "Depth_inches"]);
    assert_eq!(
        table.row_by_key("Continuity_Error_pcnt"),
        Some(&[Value::Text("-0.219".into()), Value::Text("-0.219".into())][..])
    );
}

#[test]
fn routing_continuity_finds_its_own_evaporation_row() {
    let mut rpt = reader();
    let table = rpt.table("flow_routing_continuity").unwrap();

    // the runoff block above also carries an Evaporation Loss row with
    // different values; the routing scan must resolve to its own
    assert_eq!(
        table.row_by_key("Evaporation_Loss"),
        Some(&[Value::Text("0.010".into()), Value::Text("0.003".into())][..])
    );
    assert_eq!(table.n_rows(), 12);
}

#[test]
fn runoff_summary_carries_the_runon_column_at_5_1() {
    let mut rpt = reader();
    let table = rpt.table("subcatchment_runoff_results").unwrap();

    assert!(table.columns().iter().any(|c| c == "Total_Runon_in"));
    assert_eq!(table.get(0, "Runoff_Coeff"), Some(&Value::Real(0.310)));
}

#[test]
fn outfall_loading_fuses_and_drops_separator_rows() {
    let mut rpt = reader();
    let table = rpt.table("outfall_loading_results").unwrap();

    assert_eq!(table.index_name(), Some("Outfall_Node"));
    assert_eq!(table.index(), ["O1", "18", "System"]);
    assert!(table.index().iter().all(|key| !key.contains("----")));
    assert_eq!(
        table.columns(),
        ["Flow_Freq_Pcnt", "Avg_Flow_CFS", "Total_Volume_10_6_gal"]
    );
    assert_eq!(table.get(2, "Avg_Flow_CFS"), Some(&Value::Real(0.05)));
}

#[test]
fn final_block_runs_to_end_of_file() {
    let mut rpt = reader();
    let table = rpt.table("link_pollutant_load_results").unwrap();

    assert_eq!(table.index(), ["C1", "C2"]);
    assert_eq!(table.columns(), ["TSS_lbs"]);
    assert_eq!(table.get(1, "TSS_lbs"), Some(&Value::Real(8.51)));
}

#[test]
fn accessors_are_idempotent() {
    let mut rpt = reader();
    let first = rpt.table("node_depth_results").unwrap().clone();
    let second = rpt.table("node_depth_results").unwrap().clone();
    assert_eq!(first, second);
}

#[test]
fn legacy_reports_resolve_the_pre_runon_columns() {
    let text = concat!(
        "  EPA STORM WATER MANAGEMENT MODEL - VERSION 5.0 (Build 5.0.022)\n",
        "  Flow Units ............... CFS\n",
        "  ***************************\n",
        "  Subcatchment Runoff Summary\n",
        "  ***************************\n",
        "\n",
        "  ----------------------------\n",
        "  headers\n",
        "  headers\n",
        "  headers\n",
        "  ----------------------------\n",
        "  S1   3.00  0.00  2.04  0.00  0.93  0.93  0.25  1.21  0.310\n",
        "  \n",
    );
    let mut rpt = ReportReader::from_document(Document::from_text(text)).unwrap();
    assert_eq!(rpt.version(), FormatVersion::new(5, 0));

    let table = rpt.table("subcatchment_runoff_results").unwrap();
    assert!(!table.columns().iter().any(|c| c == "Total_Runon_in"));
    assert_eq!(table.columns().len(), 9);
    assert_eq!(table.n_rows(), 1);
}

#[test]
fn metric_reports_resolve_metric_names() {
    let text = concat!(
        "  EPA STORM WATER MANAGEMENT MODEL - VERSION 5.1 (Build 5.1.013)\n",
        "  Flow Units ............... LPS\n",
        "  ******************\n",
        "  Node Depth Summary\n",
        "  ******************\n",
        "\n",
        "  ------------------------------\n",
        "  headers\n",
        "  headers\n",
        "  headers\n",
        "  ------------------------------\n",
        "  J1  JUNCTION  0.14  0.30  29.57  0  01:00  0.30\n",
        "  \n",
    );
    let mut rpt = ReportReader::from_document(Document::from_text(text)).unwrap();
    assert_eq!(rpt.units(), UnitFamily::Lps);

    let table = rpt.table("node_depth_results").unwrap();
    assert!(table.columns().iter().any(|c| c == "Average_Depth_Meters"));
    assert_eq!(
        table.get(0, "Average_Depth_Meters"),
        Some(&Value::Real(0.14))
    );
}

#[test]
fn convenience_function_round_trips_through_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{REPORT}").unwrap();

    let table = read_report_block(file.path(), "node_depth_results").unwrap();
    assert_eq!(table.n_rows(), 3);
}
