//! Integration tests for resume rendering.

use lopdf::Document;
use resumekit::render::Element;
use resumekit::{
    extract_text, layout_resume, render_resume_pdf, render_resume_pdf_with_options, RenderOptions,
    Resume,
};

fn sample_resume() -> Resume {
    Resume {
        name: "Jane Doe".to_string(),
        position: "Staff Engineer".to_string(),
        summary: "Builds reliable distributed systems and mentors teams.".to_string(),
        education: vec!["BSc Computer Science, MIT".to_string()],
        work_experience: vec!["Acme Corp, Staff Engineer, 2018-2024".to_string()],
        skills: vec!["Rust".to_string(), "Go".to_string()],
        certificates: vec!["CKA".to_string()],
        languages: vec!["English".to_string()],
    }
}

fn page_count(pdf: &[u8]) -> usize {
    Document::load_mem(pdf).unwrap().get_pages().len()
}

#[test]
fn test_default_resume_single_page() {
    let pdf = render_resume_pdf(&Resume::default()).unwrap();
    assert_eq!(page_count(&pdf), 1);

    let layout = layout_resume(&Resume::default(), &RenderOptions::default());
    assert_eq!(layout.page_count(), 1);
    assert!(matches!(layout.pages[0].elements.as_slice(), [Element::Rule { .. }]));
}

#[test]
fn test_sample_resume_single_page() {
    let pdf = render_resume_pdf(&sample_resume()).unwrap();
    assert_eq!(page_count(&pdf), 1);
}

#[test]
fn test_many_entries_paginate() {
    let mut resume = sample_resume();
    resume.work_experience = (0..60)
        .map(|i| {
            format!(
                "Company {i}, Senior Engineer, responsible for designing and operating \
                 services that handle millions of requests per day across regions"
            )
        })
        .collect();

    let options = RenderOptions::default();
    let layout = layout_resume(&resume, &options);
    assert!(layout.page_count() >= 2);

    // Every bullet's wrapped lines stay together on a single page.
    for i in 0..60 {
        let prefix = format!("\u{2022} Company {i},");
        let first_page = layout
            .pages
            .iter()
            .position(|page| page.texts().any(|t| t.starts_with(&prefix)))
            .unwrap();
        let continuation = layout.pages[first_page]
            .texts()
            .skip_while(|t| !t.starts_with(&prefix))
            .nth(1)
            .unwrap();
        assert!(!continuation.starts_with("\u{2022} Company"));
        assert!(continuation.contains("services") || continuation.contains("requests"));
    }

    let pdf = render_resume_pdf_with_options(&resume, &options).unwrap();
    assert_eq!(page_count(&pdf), layout.page_count());
}

#[test]
fn test_text_stays_inside_margins() {
    let mut resume = sample_resume();
    resume.summary = "Summary sentence that keeps going. ".repeat(400);

    let options = RenderOptions::default();
    let layout = layout_resume(&resume, &options);
    for page in &layout.pages {
        for element in &page.elements {
            if let Element::Text { x, y, text, face, size } = element {
                assert!(*y >= options.margin && *y <= options.bottom_limit());
                let width = resumekit::render::text_width_mm(text, *face, *size);
                assert!(x + width <= options.page_width - options.margin + 0.01);
            }
        }
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let resume = sample_resume();
    assert_eq!(
        render_resume_pdf(&resume).unwrap(),
        render_resume_pdf(&resume).unwrap()
    );
}

#[test]
fn test_rendered_pdf_extracts_back() {
    let pdf = render_resume_pdf(&sample_resume()).unwrap();
    let text = extract_text(&pdf).unwrap();

    let reparsed = resumekit::parse_resume(&text);
    assert_eq!(reparsed.name, "Jane Doe");
    assert!(text.contains("Position: Staff Engineer"));
    assert!(text.contains("\u{2022} Acme Corp, Staff Engineer, 2018-2024"));
}

#[test]
fn test_title_metadata() {
    let options = RenderOptions::new()
        .with_compression(false)
        .with_title("Jane Doe - CV");
    let pdf = render_resume_pdf_with_options(&sample_resume(), &options).unwrap();

    let doc = Document::load_mem(&pdf).unwrap();
    let info_ref = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info = doc.get_dictionary(info_ref).unwrap();
    let title = info.get(b"Title").unwrap().as_str().unwrap();
    assert_eq!(title, b"Jane Doe - CV");
}

#[test]
fn test_non_latin_text_is_replaced() {
    let resume = Resume {
        name: "\u{674e}\u{96f7}".to_string(),
        ..Resume::default()
    };
    let options = RenderOptions::new().with_compression(false);
    let pdf = render_resume_pdf_with_options(&resume, &options).unwrap();
    assert!(String::from_utf8_lossy(&pdf).contains("(??) Tj"));
}
