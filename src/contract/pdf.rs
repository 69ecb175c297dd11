//! Serialization of a [`PageLayout`] into a single-page PDF.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use super::layout::{DrawOp, FontFace, ImageItem, PageLayout, TextItem, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use super::logo::LogoImage;
use super::text::{to_utf16_be, to_win_ansi};
use super::ContractError;

const PT_PER_MM: f32 = 72.0 / 25.4;
const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";
const LOGO_NAME: &str = "Im1";

fn pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

/// Write the layout as PDF bytes.
///
/// Output carries no timestamps or random identifiers, so equal inputs
/// produce equal bytes.
pub fn write_pdf(layout: &PageLayout, logo: &LogoImage) -> Result<Vec<u8>, ContractError> {
    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(standard_font("Helvetica"));
    let bold_id = doc.add_object(standard_font("Helvetica-Bold"));
    let logo_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => logo.width_px as i64,
            "Height" => logo.height_px as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        logo.jpeg.clone(),
    ));

    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR_FONT => regular_id,
            BOLD_FONT => bold_id,
        },
        "XObject" => dictionary! {
            LOGO_NAME => logo_id,
        },
    });

    let content = Content {
        operations: page_operations(layout),
    };
    let encoded = content
        .encode()
        .map_err(|e| ContractError::Serialization(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(Dictionary::new(), encoded));

    let media_box: Vec<Object> = vec![
        0.into(),
        0.into(),
        pt(PAGE_WIDTH_MM).into(),
        pt(PAGE_HEIGHT_MM).into(),
    ];
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => media_box,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(to_utf16_be(&layout.title), StringFormat::Hexadecimal),
        "Author" => Object::String(to_utf16_be(&layout.author), StringFormat::Hexadecimal),
    });

    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ContractError::Serialization(e.to_string()))?;
    Ok(buffer)
}

fn standard_font(base_font: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn page_operations(layout: &PageLayout) -> Vec<Operation> {
    let mut operations = Vec::new();
    for op in &layout.ops {
        match op {
            DrawOp::Text(item) => push_text(&mut operations, item),
            DrawOp::Logo(item) => push_logo(&mut operations, item),
        }
    }
    operations
}

fn push_text(operations: &mut Vec<Operation>, item: &TextItem) {
    let font = match item.face {
        FontFace::Regular => REGULAR_FONT,
        FontFace::Bold => BOLD_FONT,
    };

    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new("Tf", vec![font.into(), item.size_pt.into()]));
    operations.push(Operation::new(
        "Td",
        vec![pt(item.x_mm).into(), pt(PAGE_HEIGHT_MM - item.y_mm).into()],
    ));
    operations.push(Operation::new(
        "Tj",
        vec![Object::String(to_win_ansi(&item.text), StringFormat::Literal)],
    ));
    operations.push(Operation::new("ET", vec![]));
}

fn push_logo(operations: &mut Vec<Operation>, item: &ImageItem) {
    let bottom = PAGE_HEIGHT_MM - item.y_mm - item.height_mm;

    operations.push(Operation::new("q", vec![]));
    operations.push(Operation::new(
        "cm",
        vec![
            pt(item.width_mm).into(),
            0.into(),
            0.into(),
            pt(item.height_mm).into(),
            pt(item.x_mm).into(),
            pt(bottom).into(),
        ],
    ));
    operations.push(Operation::new("Do", vec![LOGO_NAME.into()]));
    operations.push(Operation::new("Q", vec![]));
}
