//! Direction-aware extraction of arrival cells from a station page.
//!
//! The realtime page has no attribute tying an arrival cell to a direction.
//! Arrivals are laid out as repeated trains tables, roughly:
//!
//! ```text
//! <table class="ipf-st-ip-trains-subtable">          <- southbound
//!   <tr class="ipf-st-ip-trains-subtable-tr">
//!     ...
//!     <td class="ipf-st-ip-trains-subtable-td-arrivaltime">30 min.</td>
//!   </tr>
//! </table>
//! <table class="ipf-st-ip-trains-subtable">          <- northbound
//!   ...
//! </table>
//! ```
//!
//! so direction has to be inferred from position. Both selectors below are
//! an unversioned contract with the site and may break without notice.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use crate::domain::Direction;

/// Selector for one direction's trains table.
pub const DIRECTION_SELECTOR: &str = ".ipf-st-ip-trains-subtable";

/// Selector for an arrival-time cell.
pub const TIMING_SELECTOR: &str = ".ipf-st-ip-trains-subtable-td-arrivaltime";

/// Number of trains the flat-slice strategy assumes per direction.
const FLAT_SLICE_WIDTH: usize = 3;

static DIRECTION: LazyLock<Selector> = LazyLock::new(|| compile(DIRECTION_SELECTOR));
static TIMING: LazyLock<Selector> = LazyLock::new(|| compile(TIMING_SELECTOR));

fn compile(selector: &str) -> Selector {
    Selector::parse(selector).expect("static selector is valid CSS")
}

/// How arrival cells are attributed to a direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Read every arrival cell inside the Nth trains table, where N is
    /// [`Direction::group_index`]. A missing table yields no cells.
    #[default]
    TableGroup,

    /// Collect every arrival cell on the page and take a fixed window:
    /// cells 0-2 for southbound, 3-5 for northbound.
    ///
    /// Assumes southbound always shows exactly three trains. When it shows
    /// fewer, northbound cells are reported as southbound.
    FlatSlice,
}

impl ExtractionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionStrategy::TableGroup => "table-group",
            ExtractionStrategy::FlatSlice => "flat-slice",
        }
    }
}

/// Return the raw text of each arrival cell for `direction`, in page order.
///
/// A page with no trains tables, or a direction with no table, gives an
/// empty result rather than an error.
pub fn extract_timings(
    doc: &Html,
    direction: Direction,
    strategy: ExtractionStrategy,
) -> Vec<String> {
    match strategy {
        ExtractionStrategy::TableGroup => table_group(doc, direction),
        ExtractionStrategy::FlatSlice => flat_slice(doc, direction),
    }
}

fn table_group(doc: &Html, direction: Direction) -> Vec<String> {
    let index = direction.group_index();

    let Some(table) = doc.select(&DIRECTION).nth(index) else {
        trace!(index, "no trains table for direction");
        return Vec::new();
    };

    table.select(&TIMING).map(cell_text).collect()
}

fn flat_slice(doc: &Html, direction: Direction) -> Vec<String> {
    let start = direction.group_index() * FLAT_SLICE_WIDTH;

    doc.select(&TIMING)
        .skip(start)
        .take(FLAT_SLICE_WIDTH)
        .map(cell_text)
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect()
}
