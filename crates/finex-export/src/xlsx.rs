//! `.xlsx` rendering of a statement grid

use crate::error::ExportError;
use crate::grid::{Fill, StatementGrid, FIRST_DATA_ROW};
use finex_domain::AnnotatedStatement;
use rust_xlsxwriter::{Color, Format, Workbook};
use tracing::debug;

/// Name of the worksheet holding the statement
pub const SHEET_NAME: &str = "Income Statement";

const LINE_ITEM_COLUMN_WIDTH: f64 = 28.0;
const NOTES_COLUMN_WIDTH: f64 = 40.0;

/// Render a grid to workbook bytes
pub fn render_xlsx(grid: &StatementGrid) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let warning = Format::new().set_background_color(Color::RGB(Fill::Warning.rgb()));
    let caution = Format::new().set_background_color(Color::RGB(Fill::Caution.rgb()));
    let header = Format::new().set_bold();

    let too_large = || ExportError::GridTooLarge {
        rows: grid.rows().len(),
        columns: grid.width(),
    };
    let height = u32::try_from(grid.rows().len()).map_err(|_| too_large())?;
    let width = u16::try_from(grid.width()).map_err(|_| too_large())?;
    let header_row = (FIRST_DATA_ROW - 1) as u32;

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (r, row) in (0..height).zip(grid.rows()) {
        for (c, cell) in (0..width).zip(row) {
            let format = match cell.fill {
                Some(Fill::Warning) => Some(&warning),
                Some(Fill::Caution) => Some(&caution),
                None if r == header_row => Some(&header),
                None => None,
            };
            match format {
                Some(format) => sheet.write_string_with_format(r, c, &cell.text, format)?,
                None => sheet.write_string(r, c, &cell.text)?,
            };
        }
    }

    sheet.set_column_width(0, LINE_ITEM_COLUMN_WIDTH)?;
    if width > 1 {
        sheet.set_column_width(width - 1, NOTES_COLUMN_WIDTH)?;
    }

    let bytes = workbook.save_to_buffer()?;
    debug!("Rendered workbook: {} rows, {} bytes", grid.rows().len(), bytes.len());
    Ok(bytes)
}

/// Lay out and render a statement in one step
pub fn statement_to_xlsx(statement: &AnnotatedStatement) -> Result<Vec<u8>, ExportError> {
    render_xlsx(&StatementGrid::from_statement(statement))
}
