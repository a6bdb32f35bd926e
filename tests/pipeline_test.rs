//! Integration tests driving the full pipeline through mock sources.

use std::collections::BTreeMap;

use unlayout::{
    render, ContentItem, Error, Extraction, Glyph, ImageSource, JsonFormat, LayoutSource, Pipeline,
    PipelineOptions, RawImage, RawRows, Result, TableStrategy,
};

/// Mock layout source backed by in-memory pages.
struct MockLayout {
    pages: Vec<MockPage>,
}

#[derive(Default)]
struct MockPage {
    glyphs: Vec<Glyph>,
    text: String,
}

impl MockLayout {
    fn single(text: &str) -> Self {
        Self {
            pages: vec![MockPage {
                glyphs: Vec::new(),
                text: text.to_string(),
            }],
        }
    }
}

impl LayoutSource for MockLayout {
    fn page_count(&self) -> Result<u32> {
        Ok(self.pages.len() as u32)
    }

    fn glyphs(&self, page: u32) -> Result<Vec<Glyph>> {
        Ok(self.pages[(page - 1) as usize].glyphs.clone())
    }

    fn text(&self, page: u32) -> Result<String> {
        Ok(self.pages[(page - 1) as usize].text.clone())
    }
}

/// Mock table strategy returning the same tables for every page.
struct MockTables {
    name: &'static str,
    result: Extraction<Vec<RawRows>>,
}

impl MockTables {
    fn none() -> Self {
        Self {
            name: "primary",
            result: Extraction::Complete(Vec::new()),
        }
    }

    fn fixed(name: &'static str, count: usize) -> Self {
        let raw = (0..count)
            .map(|i| vec![vec![Some(format!("table {i}")), None]])
            .collect();
        Self {
            name,
            result: Extraction::Complete(raw),
        }
    }
}

impl TableStrategy for MockTables {
    fn name(&self) -> &str {
        self.name
    }

    fn extract(&self, _page: u32) -> Extraction<Vec<RawRows>> {
        self.result.clone()
    }
}

/// Mock image source with a fixed page map.
struct MockImages {
    map: BTreeMap<u32, Vec<RawImage>>,
}

impl ImageSource for MockImages {
    fn images(&self) -> Result<BTreeMap<u32, Vec<RawImage>>> {
        Ok(self.map.clone())
    }
}

fn glyph_line(text: &str, size: f32, top: f32) -> Vec<Glyph> {
    text.chars()
        .map(|c| Glyph::new(c.to_string(), size, top))
        .collect()
}

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

#[test]
fn end_to_end_single_page_without_headings() {
    let layout = MockLayout::single("TITLE\n\nThis is body text. It continues here.");
    let doc = Pipeline::new(Box::new(layout), Box::new(MockTables::none()))
        .run()
        .unwrap();

    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "pages": [{
                "page_number": 1,
                "content": [
                    {
                        "type": "paragraph",
                        "section": null,
                        "sub_section": null,
                        "text": "TITLE"
                    },
                    {
                        "type": "paragraph",
                        "section": null,
                        "sub_section": null,
                        "text": "This is body text. It continues here."
                    }
                ]
            }]
        })
    );
}

#[test]
fn pipeline_is_idempotent() {
    let make = || {
        let mut page = MockPage {
            glyphs: glyph_line("OVERVIEW", 10.0, 20.0),
            text: "First block.\n\nSecond block.\n\nThird block.".to_string(),
        };
        page.glyphs
            .extend(glyph_line("ordinary body text on the page", 10.0, 80.0));
        Pipeline::new(
            Box::new(MockLayout { pages: vec![page] }),
            Box::new(MockTables::fixed("primary", 1)),
        )
    };

    let first = render::to_json(&make().run().unwrap(), JsonFormat::Compact).unwrap();
    let second = render::to_json(&make().run().unwrap(), JsonFormat::Compact).unwrap();
    assert_eq!(first, second);
}

#[test]
fn section_distribution_and_paragraph_conservation() {
    // Two uppercase headings, five blank-line paragraphs: the first section
    // takes one paragraph, the second takes the remaining four.
    let mut glyphs = glyph_line("INTRODUCTION", 10.0, 10.0);
    glyphs.extend(glyph_line("METHODS", 10.0, 60.0));
    glyphs.extend(glyph_line("lowercase body keeps the average flat", 10.0, 120.0));

    let page = MockPage {
        glyphs,
        text: "One.\n\nTwo.\n\nThree.\n\nFour.\n\nFive.".to_string(),
    };

    let doc = Pipeline::new(
        Box::new(MockLayout { pages: vec![page] }),
        Box::new(MockTables::none()),
    )
    .run()
    .unwrap();

    let content = &doc.get_page(1).unwrap().content;
    assert_eq!(content.len(), 5);

    let sections: Vec<Option<&str>> = content.iter().map(|item| item.section()).collect();
    assert_eq!(
        sections,
        vec![
            Some("INTRODUCTION"),
            Some("METHODS"),
            Some("METHODS"),
            Some("METHODS"),
            Some("METHODS"),
        ]
    );
}

#[test]
fn alternate_strategy_falls_back_to_primary() {
    // The alternate is "unavailable" (always empty); the primary's two
    // tables must come through unchanged.
    let layout = MockLayout::single("");
    let doc = Pipeline::new(Box::new(layout), Box::new(MockTables::fixed("primary", 2)))
        .with_alternate_tables(Box::new(MockTables::fixed("alternate", 0)))
        .with_options(PipelineOptions::new().prefer_alternate_tables(true))
        .run()
        .unwrap();

    let page = doc.get_page(1).unwrap();
    assert_eq!(page.table_count(), 2);

    // Cell normalization: None becomes an empty string.
    match &page.content[0] {
        ContentItem::Table { table_data, .. } => {
            assert_eq!(table_data[0], vec!["table 0".to_string(), String::new()]);
        }
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn failing_glyph_source_degrades_to_no_headings() {
    struct FlakyGlyphs;

    impl LayoutSource for FlakyGlyphs {
        fn page_count(&self) -> Result<u32> {
            Ok(1)
        }

        fn glyphs(&self, _page: u32) -> Result<Vec<Glyph>> {
            Err(Error::Other("glyph table corrupted".to_string()))
        }

        fn text(&self, _page: u32) -> Result<String> {
            Ok("Body text only.".to_string())
        }
    }

    let doc = Pipeline::new(Box::new(FlakyGlyphs), Box::new(MockTables::none()))
        .run()
        .unwrap();

    let page = doc.get_page(1).unwrap();
    assert_eq!(page.paragraph_count(), 1);
    assert!(page.content.iter().all(|item| item.section().is_none()));
}

#[test]
fn unreadable_source_aborts_whole_run() {
    struct Broken;

    impl LayoutSource for Broken {
        fn page_count(&self) -> Result<u32> {
            Err(Error::UnreadableSource("not a document".to_string()))
        }

        fn glyphs(&self, _page: u32) -> Result<Vec<Glyph>> {
            unreachable!()
        }

        fn text(&self, _page: u32) -> Result<String> {
            unreachable!()
        }
    }

    let result = Pipeline::new(Box::new(Broken), Box::new(MockTables::none())).run();
    assert!(matches!(result, Err(Error::UnreadableSource(_))));
}

#[test]
fn images_are_persisted_and_classified() {
    let dir = tempfile::tempdir().unwrap();

    let mut map = BTreeMap::new();
    map.insert(
        1,
        vec![
            RawImage {
                data: PNG_MAGIC.to_vec(),
                width: Some(500),
                height: Some(300),
                xref: 5,
            },
            RawImage {
                data: PNG_MAGIC.to_vec(),
                width: Some(500),
                height: Some(301),
                xref: 6,
            },
        ],
    );

    let doc = Pipeline::new(
        Box::new(MockLayout::single("")),
        Box::new(MockTables::none()),
    )
    .with_images(Box::new(MockImages { map }))
    .with_options(PipelineOptions::new().with_asset_dir(dir.path()))
    .run()
    .unwrap();

    let content = &doc.get_page(1).unwrap().content;
    assert_eq!(content.len(), 2);

    match (&content[0], &content[1]) {
        (
            ContentItem::Image {
                image_path, width, ..
            },
            ContentItem::Chart {
                image_path: chart_path,
                height,
                ..
            },
        ) => {
            assert!(image_path.ends_with("p1_img_0.png"));
            assert!(chart_path.ends_with("p1_img_1.png"));
            assert_eq!(*width, Some(500));
            assert_eq!(*height, Some(301));
            assert!(std::path::Path::new(image_path).exists());
            assert!(std::path::Path::new(chart_path).exists());
        }
        other => panic!("expected image then chart, got {other:?}"),
    }
}

#[test]
fn multi_page_document_keeps_page_order_and_empty_pages() {
    let pages = vec![
        MockPage {
            glyphs: Vec::new(),
            text: "Page one text.".to_string(),
        },
        MockPage::default(),
        MockPage {
            glyphs: Vec::new(),
            text: "Page three text.".to_string(),
        },
    ];

    let doc = Pipeline::new(
        Box::new(MockLayout { pages }),
        Box::new(MockTables::none()),
    )
    .run()
    .unwrap();

    assert_eq!(doc.page_count(), 3);
    assert_eq!(doc.pages[0].page_number, 1);
    assert!(doc.pages[1].is_empty());
    assert_eq!(doc.pages[2].paragraph_count(), 1);
}
