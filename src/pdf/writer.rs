use std::collections::BTreeMap;
use std::fmt::Write as _;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};
use tracing::{debug, info};

use super::font::{EmbeddedFont, FontSet};
use crate::core::RenderError;
use crate::document::{Align, Element, FontWeight, InvoiceDocument, Page};
use crate::theme::Rgb;

/// bfchar entries per CMap section.
const CMAP_CHUNK: usize = 100;

/// A serialized invoice PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfInvoice {
    bytes: Vec<u8>,
    page_count: usize,
}

impl PdfInvoice {
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Glyphs used per font, keyed by glyph ID for a stable output order.
#[derive(Debug, Default)]
struct GlyphUsage {
    glyphs: BTreeMap<u16, (char, i64)>,
}

impl GlyphUsage {
    /// Encode `text` as big-endian glyph IDs and record each glyph.
    fn encode(&mut self, font: &EmbeddedFont, text: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len() * 2);
        for c in text.chars() {
            let gid = font.glyph_id(c);
            self.glyphs
                .entry(gid)
                .or_insert_with(|| (c, font.advance(c) as i64));
            out.extend_from_slice(&gid.to_be_bytes());
        }
        out
    }
}

/// Serialize an assembled document.
///
/// Fonts are embedded as composite (Type0) fonts with Identity-H encoding
/// and a ToUnicode map, so any script the font covers renders and can be
/// extracted. Nothing time- or run-dependent is written: identical input
/// gives identical bytes.
pub fn render_pdf(document: &InvoiceDocument, fonts: &FontSet) -> Result<PdfInvoice, RenderError> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let font_ids = [doc.new_object_id(), doc.new_object_id()];
    let mut usage = [GlyphUsage::default(), GlyphUsage::default()];

    let (width, height) = document.page_size;
    let mut kids = Vec::with_capacity(document.pages.len());
    for page in &document.pages {
        let content = page_content(page, height, fonts, &mut usage);
        let encoded = content.encode().map_err(|e| {
            RenderError::Pdf(format!("failed to encode page {}: {e}", page.number))
        })?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
        debug!(page = page.number, elements = page.elements.len(), "page written");
    }

    for (weight, (font_id, used)) in [FontWeight::Regular, FontWeight::Bold]
        .into_iter()
        .zip(font_ids.iter().zip(&usage))
    {
        write_font(&mut doc, *font_id, fonts.get(weight), used);
    }

    let page_count = kids.len();
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count as i64,
        "Resources" => dictionary! {
            "Font" => dictionary! {
                "F1" => font_ids[0],
                "F2" => font_ids[1],
            },
        },
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => text_string(&document.title),
        "Producer" => Object::string_literal("rechnung-pdf"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| RenderError::Pdf(format!("failed to save PDF: {e}")))?;

    info!(pages = page_count, bytes = bytes.len(), "PDF written");
    Ok(PdfInvoice { bytes, page_count })
}

fn font_resource(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Regular => "F1",
        FontWeight::Bold => "F2",
    }
}

fn color_operands(color: Rgb) -> Vec<Object> {
    color.unit().into_iter().map(Object::from).collect()
}

/// Translate one page's elements into content operators. Model coordinates
/// run downwards from the top edge; PDF runs upwards from the bottom.
fn page_content(
    page: &Page,
    page_height: f32,
    fonts: &FontSet,
    usage: &mut [GlyphUsage; 2],
) -> Content {
    let mut operations = Vec::new();
    for element in &page.elements {
        match element {
            Element::Rect {
                x,
                y,
                width,
                height,
                color,
            } => {
                operations.push(Operation::new("rg", color_operands(*color)));
                operations.push(Operation::new(
                    "re",
                    vec![
                        (*x).into(),
                        (page_height - y - height).into(),
                        (*width).into(),
                        (*height).into(),
                    ],
                ));
                operations.push(Operation::new("f", vec![]));
            }
            Element::Line {
                x1,
                y1,
                x2,
                y2,
                width,
                color,
            } => {
                operations.push(Operation::new("RG", color_operands(*color)));
                operations.push(Operation::new("w", vec![(*width).into()]));
                operations.push(Operation::new(
                    "m",
                    vec![(*x1).into(), (page_height - y1).into()],
                ));
                operations.push(Operation::new(
                    "l",
                    vec![(*x2).into(), (page_height - y2).into()],
                ));
                operations.push(Operation::new("S", vec![]));
            }
            Element::Text {
                x,
                y,
                text,
                size,
                weight,
                color,
                align,
            } => {
                if text.is_empty() {
                    continue;
                }
                let font = fonts.get(*weight);
                let slot = match weight {
                    FontWeight::Regular => 0,
                    FontWeight::Bold => 1,
                };
                let text_width = font.text_width(text, *size);
                let left = match align {
                    Align::Left => *x,
                    Align::Center => x - text_width / 2.0,
                    Align::Right => x - text_width,
                };
                let glyphs = usage[slot].encode(font, text);

                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new("rg", color_operands(*color)));
                operations.push(Operation::new(
                    "Tf",
                    vec![font_resource(*weight).into(), (*size).into()],
                ));
                operations.push(Operation::new(
                    "Td",
                    vec![left.into(), (page_height - y).into()],
                ));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::String(glyphs, StringFormat::Hexadecimal)],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
        }
    }
    Content { operations }
}

/// Write the Type0 font dictionary at `font_id` with its descendant font,
/// descriptor, embedded font program and ToUnicode map.
fn write_font(doc: &mut Document, font_id: ObjectId, font: &EmbeddedFont, usage: &GlyphUsage) {
    let file_id = doc.add_object(Stream::new(
        dictionary! { "Length1" => font.data().len() as i64 },
        font.data().to_vec(),
    ));

    let ascent = font.ascent();
    let descent = font.descent();
    let descriptor_id = doc.add_object(dictionary! {
        "Type" => "FontDescriptor",
        "FontName" => font.base_name(),
        "Flags" => 32,
        "FontBBox" => vec![0.into(), descent.into(), 1000.into(), ascent.into()],
        "ItalicAngle" => 0,
        "Ascent" => ascent,
        "Descent" => descent,
        "CapHeight" => ascent,
        "StemV" => 80,
        "FontFile2" => file_id,
    });

    let mut widths = Vec::with_capacity(usage.glyphs.len() * 2);
    for (gid, (_, width)) in &usage.glyphs {
        widths.push(Object::Integer(i64::from(*gid)));
        widths.push(Object::Array(vec![Object::Integer(*width)]));
    }

    let cid_font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "CIDFontType2",
        "BaseFont" => font.base_name(),
        "CIDSystemInfo" => dictionary! {
            "Registry" => Object::string_literal("Adobe"),
            "Ordering" => Object::string_literal("Identity"),
            "Supplement" => 0,
        },
        "FontDescriptor" => descriptor_id,
        "CIDToGIDMap" => "Identity",
        "DW" => 1000,
        "W" => widths,
    });

    let cmap_id = doc.add_object(Stream::new(dictionary! {}, to_unicode_cmap(usage).into_bytes()));

    doc.objects.insert(
        font_id,
        Object::Dictionary(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type0",
            "BaseFont" => font.base_name(),
            "Encoding" => "Identity-H",
            "DescendantFonts" => vec![Object::Reference(cid_font_id)],
            "ToUnicode" => cmap_id,
        }),
    );
}

fn to_unicode_cmap(usage: &GlyphUsage) -> String {
    let mut cmap = String::from(
        "/CIDInit /ProcSet findresource begin\n\
         12 dict begin\n\
         begincmap\n\
         /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
         /CMapName /Adobe-Identity-UCS def\n\
         /CMapType 2 def\n\
         1 begincodespacerange\n\
         <0000> <FFFF>\n\
         endcodespacerange\n",
    );

    let entries: Vec<(&u16, &(char, i64))> = usage.glyphs.iter().collect();
    for chunk in entries.chunks(CMAP_CHUNK) {
        let _ = writeln!(cmap, "{} beginbfchar", chunk.len());
        for (gid, (c, _)) in chunk {
            let mut units = [0u16; 2];
            let utf16: String = c
                .encode_utf16(&mut units)
                .iter()
                .map(|u| format!("{u:04X}"))
                .collect();
            let _ = writeln!(cmap, "<{gid:04X}> <{utf16}>");
        }
        cmap.push_str("endbfchar\n");
    }

    cmap.push_str(
        "endcmap\n\
         CMapName currentdict /CMap defineresource pop\n\
         end\n\
         end\n",
    );
    cmap
}

/// PDF text string: literal for ASCII, UTF-16BE with byte order mark otherwise.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}
