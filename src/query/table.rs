// Query Table
// Eleven addressable answer slots, one per assignment question

use crate::error::{QueryTableError, Result};
use tracing::debug;

/// Number of slots in the table (questions 0 through 10)
pub const SLOT_COUNT: usize = 11;

/// The text every slot holds until an answer is written into it
pub const PLACEHOLDER: &str = "select 0;";

/// The answer to question 0 that ships with the assignment as an example
pub const WORKED_EXAMPLE: &str = "select airportid, city\nfrom airports\norder by city;";

/// Longest query preview shown by [`QueryTable::format`]
const PREVIEW_WIDTH: usize = 48;

/// A read-only view of one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySlot<'a> {
    pub index: usize,
    pub text: &'a str,
}

impl QuerySlot<'_> {
    /// True once the slot holds something other than the placeholder
    pub fn is_answered(&self) -> bool {
        self.text.trim() != PLACEHOLDER
    }
}

/// The fixed-size table of query strings
///
/// Every slot is created up front and none is ever removed, so the table
/// always has exactly [`SLOT_COUNT`] non-empty entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTable {
    slots: [String; SLOT_COUNT],
}

impl QueryTable {
    /// Create a table with every slot holding the placeholder
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| PLACEHOLDER.to_string()),
        }
    }

    /// Create a table with slot 0 already answered by the worked example
    pub fn with_worked_example() -> Self {
        let mut table = Self::new();
        table.slots[0] = WORKED_EXAMPLE.to_string();
        table
    }

    /// Get the query stored at `index`
    pub fn get(&self, index: i64) -> Result<&str> {
        let position = slot_position(index)?;
        Ok(&self.slots[position])
    }

    /// Replace the query stored at `index`
    ///
    /// Empty or whitespace-only text is rejected and the slot keeps its
    /// current value.
    pub fn set(&mut self, index: i64, text: impl Into<String>) -> Result<()> {
        let position = slot_position(index)?;
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QueryTableError::EmptyQuery { index });
        }

        debug!(slot = position, bytes = text.len(), "query slot updated");
        self.slots[position] = text;
        Ok(())
    }

    /// Number of slots (always [`SLOT_COUNT`])
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; present so `len` has its usual companion
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over the slots in index order
    pub fn slots(&self) -> impl Iterator<Item = QuerySlot<'_>> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, text)| QuerySlot { index, text })
    }

    /// Whether the slot at `index` holds something other than the placeholder
    pub fn is_answered(&self, index: i64) -> Result<bool> {
        let position = slot_position(index)?;
        Ok(self.slots[position].trim() != PLACEHOLDER)
    }

    /// How many slots have been answered
    pub fn answered_count(&self) -> usize {
        self.slots().filter(|slot| slot.is_answered()).count()
    }

    /// Format every slot as a box-drawn table for the terminal
    pub fn format(&self) -> String {
        let headers = ["slot", "status", "query"];
        let rows: Vec<[String; 3]> = self
            .slots()
            .map(|slot| {
                let status = if slot.is_answered() { "answered" } else { "open" };
                [slot.index.to_string(), status.to_string(), preview(slot.text)]
            })
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut result = String::new();
        result.push_str(&border(&widths, '┌', '┬', '┐'));
        result.push_str(&line(&headers.map(String::from), &widths));
        result.push_str(&border(&widths, '├', '┼', '┤'));
        for row in &rows {
            result.push_str(&line(row, &widths));
        }
        result.push_str(&border(&widths, '└', '┴', '┘'));

        result.push_str(&format!(
            "\n{} of {} slot(s) answered",
            self.answered_count(),
            self.len()
        ));
        result
    }
}

impl Default for QueryTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a caller-supplied index onto a slot position
pub(crate) fn slot_position(index: i64) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&position| position < SLOT_COUNT)
        .ok_or(QueryTableError::OutOfRange { index })
}

/// First non-blank line of a query, cut down to the preview width
fn preview(text: &str) -> String {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let first = lines.next().unwrap_or_default();
    let more = lines.next().is_some();

    let mut shown: String = first.chars().take(PREVIEW_WIDTH).collect();
    if more || first.chars().count() > PREVIEW_WIDTH {
        shown.push('…');
    }
    shown
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut result = String::new();
    result.push(left);
    for (i, width) in widths.iter().enumerate() {
        result.push_str(&"─".repeat(width + 2));
        if i < widths.len() - 1 {
            result.push(mid);
        }
    }
    result.push(right);
    result.push('\n');
    result
}

fn line(cells: &[String; 3], widths: &[usize]) -> String {
    let mut result = String::from("│");
    for (cell, width) in cells.iter().zip(widths) {
        result.push_str(&format!(" {:<width$} ", cell, width = width));
        result.push('│');
    }
    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_table_holds_placeholders() {
        let table = QueryTable::new();
        assert_eq!(table.len(), SLOT_COUNT);
        for i in 0..SLOT_COUNT as i64 {
            let text = table.get(i).unwrap();
            assert!(!text.is_empty());
            assert_eq!(text.trim(), "select 0;");
        }
        assert_eq!(table.answered_count(), 0);
    }

    #[test]
    fn test_read_slot_three_after_init() {
        let table = QueryTable::new();
        assert_eq!(table.get(3).unwrap(), "select 0;");
    }

    #[test]
    fn test_out_of_range_indices() {
        let mut table = QueryTable::new();
        assert!(matches!(
            table.get(11),
            Err(QueryTableError::OutOfRange { index: 11 })
        ));
        assert!(matches!(
            table.get(-1),
            Err(QueryTableError::OutOfRange { index: -1 })
        ));
        assert!(matches!(
            table.set(11, "select 1;"),
            Err(QueryTableError::OutOfRange { index: 11 })
        ));
    }

    #[test]
    fn test_set_leaves_neighbours_alone() {
        let mut table = QueryTable::new();
        table.set(5, "select 1;").unwrap();
        assert_eq!(table.get(5).unwrap(), "select 1;");
        assert_eq!(table.get(4).unwrap(), "select 0;");
        assert_eq!(table.get(6).unwrap(), "select 0;");
        assert!(table.is_answered(5).unwrap());
        assert!(!table.is_answered(4).unwrap());
        assert_eq!(table.answered_count(), 1);
    }

    #[test]
    fn test_set_then_get_returns_exact_text() {
        let mut table = QueryTable::new();
        let query = "\nselect name\nfrom customers\norder by name;\n";
        table.set(1, query).unwrap();
        assert_eq!(table.get(1).unwrap(), query);
    }

    #[test]
    fn test_empty_text_is_rejected() {
        let mut table = QueryTable::new();
        table.set(2, "select 2;").unwrap();
        assert!(matches!(
            table.set(2, ""),
            Err(QueryTableError::EmptyQuery { index: 2 })
        ));
        assert!(table.set(2, "  \n\t").is_err());
        assert_eq!(table.get(2).unwrap(), "select 2;");
    }

    #[test]
    fn test_worked_example_fills_only_slot_zero() {
        let table = QueryTable::with_worked_example();
        assert_eq!(table.get(0).unwrap(), WORKED_EXAMPLE);
        assert_eq!(table.answered_count(), 1);
        assert!(table.slots().skip(1).all(|slot| !slot.is_answered()));
    }

    #[test]
    fn test_slots_come_out_in_index_order() {
        let indices: Vec<usize> = QueryTable::new().slots().map(|s| s.index).collect();
        assert_eq!(indices, (0..SLOT_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_format_lists_every_slot() {
        let output = QueryTable::with_worked_example().format();
        assert!(output.contains("select airportid, city…"));
        assert!(output.contains("answered"));
        assert!(output.contains("1 of 11 slot(s) answered"));
        // header + 11 rows + 3 borders + blank + footer
        assert_eq!(output.lines().count(), 17);
    }
}
