use badge_pdf::*;
use badge_sheet::{LayoutMode, Template, statistics_for};

fn sample_roster() -> Vec<badge_layout::Attendee> {
    attendees_from_reader(
        "Company,LastName,FirstName\n\
         davara Abogados,Rangel,María\n\
         Tsuru,Aguayo,Diego\n\
         Tech Partners,López,Camila\n\
         Kia,Paz,Ana\n\
         Telecomunicaciones Interoceánicas,Fernández,Guadalupe\n"
            .as_bytes(),
    )
    .unwrap()
}

#[test]
fn test_pdf_bytes_smoke() {
    let attendees = sample_roster();
    let options = BadgeOptions::default();

    let bytes = badges_pdf_bytes(&attendees, &options).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 1000);
}

#[test]
fn test_empty_roster_renders_zero_pages() {
    let bytes = badges_pdf_bytes(&[], &BadgeOptions::default()).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_quad_template_page_count_matches_statistics() {
    let attendees = sample_roster();
    let mut options = BadgeOptions::default();
    options.template = Template::quad();

    let stats = statistics_for(&attendees, options.layout_mode, &options.template);
    // 5 mirror cards on 4-up sheets → 2 sheets → 4 pages.
    assert_eq!(stats.sheets, 2);
    assert_eq!(stats.output_pages, 4);

    let bytes = badges_pdf_bytes(&attendees, &options).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_paired_layout_renders() {
    let attendees = sample_roster();
    let mut options = BadgeOptions::default();
    options.layout_mode = LayoutMode::Paired;

    let stats = statistics_for(&attendees, options.layout_mode, &options.template);
    assert_eq!(stats.cards, 3);

    let bytes = badges_pdf_bytes(&attendees, &options).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_uniform_scaling_renders() {
    let attendees = sample_roster();
    let mut options = BadgeOptions::default();
    options.uniform_scaling = true;

    let bytes = badges_pdf_bytes(&attendees, &options).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_invalid_template_is_rejected() {
    let mut options = BadgeOptions::default();
    options.template.order_front = vec![0, 0];
    assert!(badges_pdf_bytes(&sample_roster(), &options).is_err());
}

#[tokio::test]
async fn test_generate_writes_file() {
    let attendees = sample_roster();
    let options = BadgeOptions::default();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("badges.pdf");

    generate_badges_pdf(&attendees, &options, &path).await.unwrap();

    let bytes = tokio::fs::read(&path).await.unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_roundtrip_through_json() {
    use badge_layout::{PositionAdjustment, RecordOverride};

    let mut options = BadgeOptions::default();
    options.uniform_scaling = true;
    options.layout_mode = LayoutMode::Paired;
    options.template = Template::quad();
    options.adjustments = PositionAdjustment {
        vertical_mm: -2.5,
        gap_mm: 1.0,
        width_mm: 0.0,
        horizontal_mm: 3.5,
    };
    options.overrides.insert(
        2,
        RecordOverride {
            company: Some("ACME".to_string()),
            font_scale_back: Some(1.2),
            ..Default::default()
        },
    );

    let file = tempfile::NamedTempFile::new().unwrap();
    options.save(file.path()).await.unwrap();

    let loaded = BadgeOptions::load(file.path()).await.unwrap();
    assert_eq!(loaded, options);
}
