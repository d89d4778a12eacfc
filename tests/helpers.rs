// Shared test helpers: a scripted DNS lookup and workbook reading.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use calamine::{open_workbook, Reader, Xlsx};
use dns_batch::dns::{EmptyReason, QueryOutcome, RecordKind, RecordLookup};

/// Answers queries from a fixed table. Unknown (domain, type) pairs are
/// answered as NXDOMAIN.
#[derive(Default)]
pub struct ScriptedLookup {
    answers: HashMap<(String, RecordKind), QueryOutcome>,
    calls: RefCell<Vec<(String, RecordKind)>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl ScriptedLookup {
    pub fn answer(mut self, domain: &str, kind: RecordKind, outcome: QueryOutcome) -> Self {
        self.answers.insert((domain.to_string(), kind), outcome);
        self
    }

    pub fn records(self, domain: &str, kind: RecordKind, values: &[&str]) -> Self {
        let values = values.iter().map(|v| v.to_string()).collect();
        self.answer(domain, kind, QueryOutcome::Records(values))
    }

    pub fn calls(&self) -> Vec<(String, RecordKind)> {
        self.calls.borrow().clone()
    }
}

impl RecordLookup for ScriptedLookup {
    async fn query(&self, domain: &str, kind: RecordKind) -> QueryOutcome {
        self.calls.borrow_mut().push((domain.to_string(), kind));
        self.answers
            .get(&(domain.to_string(), kind))
            .cloned()
            .unwrap_or(QueryOutcome::Empty(EmptyReason::NonExistentDomain))
    }
}

/// Reads every row of `Sheet1` as strings, header included.
#[allow(dead_code)]
pub fn read_sheet(path: &Path) -> Vec<Vec<String>> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("Failed to open workbook");
    let range = workbook
        .worksheet_range("Sheet1")
        .expect("Workbook should contain Sheet1");
    range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

/// Number of rows `Sheet1` spans, blank rows included.
///
/// Taken from the sheet's `<dimension>` element, since calamine drops
/// cells that carry no value.
#[allow(dead_code)]
pub fn sheet_row_span(path: &Path) -> u32 {
    let file = std::fs::File::open(path).expect("Failed to open workbook");
    let mut archive = zip::ZipArchive::new(file).expect("Workbook should be a zip archive");
    let mut sheet = archive
        .by_name("xl/worksheets/sheet1.xml")
        .expect("Workbook should contain sheet1.xml");
    let mut xml = String::new();
    std::io::Read::read_to_string(&mut sheet, &mut xml).expect("Failed to read sheet1.xml");

    let start = xml.find("<dimension ref=\"").expect("Sheet should have a dimension") + 16;
    let reference = &xml[start..start + xml[start..].find('"').expect("Unterminated dimension")];
    let last_cell = reference.rsplit(':').next().unwrap_or(reference);
    last_cell
        .trim_start_matches(|c: char| c.is_ascii_alphabetic())
        .parse()
        .expect("Dimension should end in a row number")
}
