//! Page layout for the enrollment contract.
//!
//! Builds the full list of drawing operations for the single A4 page. All
//! positions are millimetres from the top-left corner; text positions are
//! baselines. Nothing here touches the filesystem or the clock.

use chrono::NaiveDate;

use super::clock::format_german_date;
use super::legal::legal_block;
use super::record::EnrollmentRecord;
use super::tariff;
use super::text::capitalize_first;
use super::ContractError;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const DOCUMENT_AUTHOR: &str = "Musicschool CML";

const LEFT_COLUMN_MM: f32 = 20.0;
const RIGHT_COLUMN_MM: f32 = 110.0;
const FIELD_ROWS_MM: [f32; 5] = [55.0, 61.0, 67.0, 73.0, 79.0];
const LEGAL_TOP_MM: f32 = 90.0;
const LEGAL_LINE_MM: f32 = 5.0;

const FIELD_FONT_PT: f32 = 12.0;
const LEGAL_FONT_PT: f32 = 10.0;
const DEBIT_FONT_PT: f32 = 11.0;

const LOGO_POSITION_MM: (f32, f32) = (10.0, 10.0);
const DATE_POSITION_MM: (f32, f32) = (180.0, 10.0);
// Logos carry no physical size; place them as if printed at 96 dpi.
const LOGO_DPI: f32 = 96.0;

const SHORT_RULE: &str = "......................................................";
const LONG_RULE: &str = "........................................................................";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub x_mm: f32,
    pub y_mm: f32,
    pub face: FontFace,
    pub size_pt: f32,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageItem {
    pub x_mm: f32,
    pub y_mm: f32,
    pub width_mm: f32,
    pub height_mm: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextItem),
    Logo(ImageItem),
}

/// Everything needed to serialize the contract page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub title: String,
    pub author: String,
    pub ops: Vec<DrawOp>,
}

impl PageLayout {
    pub fn texts(&self) -> impl Iterator<Item = &TextItem> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(item) => Some(item),
            DrawOp::Logo(_) => None,
        })
    }

    pub fn logo(&self) -> Option<&ImageItem> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::Logo(item) => Some(item),
            DrawOp::Text(_) => None,
        })
    }

    /// First text item starting with `prefix`.
    pub fn find_text(&self, prefix: &str) -> Option<&TextItem> {
        self.texts().find(|item| item.text.starts_with(prefix))
    }
}

/// Page title for a contract variant.
pub fn contract_title(variant_code: &str) -> String {
    format!(
        "Anmeldung und Unterrichtsvertrag zum {}",
        tariff::label_for(variant_code)
    )
}

/// Convert a pixel extent to millimetres at the logo resolution.
pub fn px_to_mm(px: u32) -> f32 {
    px as f32 * 25.4 / LOGO_DPI
}

/// Lay out the contract page.
///
/// `logo_px` is the pixel size of the logo image; the instrument and teacher
/// fields must be non-empty.
pub fn layout_contract(
    record: &EnrollmentRecord,
    date: NaiveDate,
    logo_px: (u32, u32),
) -> Result<PageLayout, ContractError> {
    let mut page = PageBuilder::default();

    // Header
    page.logo(
        LOGO_POSITION_MM.0,
        LOGO_POSITION_MM.1,
        px_to_mm(logo_px.0),
        px_to_mm(logo_px.1),
    );
    page.font(FontFace::Bold, FIELD_FONT_PT);
    page.text(DATE_POSITION_MM.0, DATE_POSITION_MM.1, format_german_date(date));

    // Personal data grid
    let rows = [
        (
            format!("Instrument: {}", capitalize_first(&record.instrument)?),
            format!("Lehrer: {}", capitalize_first(&record.teacher_name)?),
        ),
        (
            format!("Schüler: {}", record.student_name),
            format!("Geburtsdatum: {}", record.birth_date),
        ),
        (
            format!("Straße: {}", record.street),
            format!("PLZ: {}", record.postal_code),
        ),
        (
            format!("Wohnort: {}", record.city),
            format!("Erziehungsberechtigte: {}", record.guardian_name),
        ),
        (
            format!("Telefon: +49 {}", record.phone),
            format!("E-Mail: {}", record.email),
        ),
    ];

    page.font(FontFace::Regular, FIELD_FONT_PT);
    for (y, (left, right)) in FIELD_ROWS_MM.iter().zip(rows) {
        page.text(LEFT_COLUMN_MM, *y, left);
        page.text(RIGHT_COLUMN_MM, *y, right);
    }

    // Contract clauses
    let mut y = LEGAL_TOP_MM;
    page.font(FontFace::Regular, LEGAL_FONT_PT);
    for line in legal_block(&record.contract_variant) {
        page.text(LEFT_COLUMN_MM, y, line);
        y += LEGAL_LINE_MM;
    }

    // Direct debit authorization
    y += 10.0;
    page.font(FontFace::Bold, DEBIT_FONT_PT);
    page.text(
        LEFT_COLUMN_MM,
        y,
        "Ermächtigung zum Einzug von Unterrichtsgebühren durch Lastschrift:",
    );

    page.font(FontFace::Regular, DEBIT_FONT_PT);
    let debit_lines = [
        (5.0, "Hiermit ermächtige ich Sie widerruflich, die von mir zu entrichtenden Unterrichtsgebühren"),
        (5.0, "beginnend ab ........................... bei Fälligkeit zu Lasten meines Kontos"),
        (7.0, "IBAN: ................................................................................"),
        (7.0, "durch Lastschrift einzuziehen. Wenn mein Konto die erforderliche Deckung nicht aufweist, besteht"),
        (5.0, "seitens des kontoführenden Kreditinstitutes keine Verpflichtung zur Einlösung."),
    ];
    for (advance, line) in debit_lines {
        y += advance;
        page.text(LEFT_COLUMN_MM, y, line);
    }

    // Signatures
    let signatures = [
        (SHORT_RULE, "Ort, Datum", "Unterschrift Kontoinhaber"),
        (
            LONG_RULE,
            "Unterschrift Erziehungsberechtigte",
            "Unterschrift Musikschule CML",
        ),
    ];
    for (left_rule, left_caption, right_caption) in signatures {
        y += 10.0;
        page.text(LEFT_COLUMN_MM, y, left_rule);
        page.text(RIGHT_COLUMN_MM, y, LONG_RULE);
        y += 5.0;
        page.text(LEFT_COLUMN_MM, y, left_caption);
        page.text(RIGHT_COLUMN_MM, y, right_caption);
    }

    Ok(PageLayout {
        title: contract_title(&record.contract_variant),
        author: DOCUMENT_AUTHOR.to_string(),
        ops: page.ops,
    })
}

/// Tracks the current font so text calls stay short.
struct PageBuilder {
    face: FontFace,
    size_pt: f32,
    ops: Vec<DrawOp>,
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self {
            face: FontFace::Regular,
            size_pt: FIELD_FONT_PT,
            ops: Vec::new(),
        }
    }
}

impl PageBuilder {
    fn font(&mut self, face: FontFace, size_pt: f32) {
        self.face = face;
        self.size_pt = size_pt;
    }

    fn text(&mut self, x_mm: f32, y_mm: f32, text: impl Into<String>) {
        self.ops.push(DrawOp::Text(TextItem {
            x_mm,
            y_mm,
            face: self.face,
            size_pt: self.size_pt,
            text: text.into(),
        }));
    }

    fn logo(&mut self, x_mm: f32, y_mm: f32, width_mm: f32, height_mm: f32) {
        self.ops.push(DrawOp::Logo(ImageItem {
            x_mm,
            y_mm,
            width_mm,
            height_mm,
        }));
    }
}
