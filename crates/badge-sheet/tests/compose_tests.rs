use badge_layout::{Attendee, Face};
use badge_sheet::*;

fn roster(n: usize) -> Vec<Attendee> {
    (0..n)
        .map(|i| Attendee::from_fields(&format!("Company {i}"), &format!("Person {i}"), "A").unwrap())
        .collect()
}

#[test]
fn test_ten_records_fill_three_sheets_of_four() {
    let attendees = roster(10);
    let groups = group_records(&attendees, LayoutMode::Mirror);
    let sheets = chunk_into_sheets(&groups, 4);

    let lengths: Vec<usize> = sheets.iter().map(|s| s.len()).collect();
    assert_eq!(lengths, vec![4, 4, 2]);

    // The chunks reproduce the roster exactly, in order.
    let rejoined: Vec<&Attendee> = sheets
        .iter()
        .flat_map(|s| s.iter().map(|g| &g[0]))
        .collect();
    assert_eq!(rejoined.len(), 10);
    for (i, attendee) in rejoined.iter().enumerate() {
        assert_eq!(attendee.company, format!("Company {i}"));
    }
}

#[test]
fn test_back_order_is_involution_on_quad() {
    let template = Template::quad();
    for i in 0..template.per_sheet {
        assert_eq!(template.order_back[template.order_back[i]], i);
    }
    assert_eq!(template.order_front, (0..4).collect::<Vec<_>>());
}

#[test]
fn test_front_and_back_sheets_share_a_chunk() {
    let attendees = roster(6);
    let groups = group_records(&attendees, LayoutMode::Mirror);
    let template = Template::quad();
    let sheets = chunk_into_sheets(&groups, template.per_sheet);
    assert_eq!(sheets.len(), 2);

    for chunk in sheets {
        let front = build_slots(chunk, Face::Front, &template);
        let back = build_slots(chunk, Face::Back, &template);

        // Same cards on both faces, just permuted.
        let mut front_cards: Vec<_> = front.iter().flatten().collect();
        let mut back_cards: Vec<_> = back.iter().flatten().collect();
        front_cards.sort_by(|a, b| a[0].company.cmp(&b[0].company));
        back_cards.sort_by(|a, b| a[0].company.cmp(&b[0].company));
        assert_eq!(front_cards, back_cards);
    }
}

#[test]
fn test_empty_roster_degrades_to_zero_sheets() {
    let groups = group_records(&roster(0), LayoutMode::Paired);
    assert!(groups.is_empty());
    assert!(chunk_into_sheets(&groups, 4).is_empty());

    let stats = statistics_for(&[], LayoutMode::Mirror, &Template::single());
    assert_eq!(stats.sheets, 0);
    assert_eq!(stats.output_pages, 0);
    assert_eq!(stats.empty_slots, 0);
}
