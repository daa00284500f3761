//! Snapshot tests for Compare View
//!
//! Uses insta + ratatui TestBackend for visual regression testing.

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use sidelog::compare::{CompareOptions, compare};
use sidelog::model::{BranchLog, CommitRecord};
use sidelog::ui::render::Renderer;
use sidelog::ui::views::CompareView;

fn sample_view() -> CompareView {
    let main = vec![
        CommitRecord::new("a1", "Add login"),
        CommitRecord::new("m2", "Hotfix"),
        CommitRecord::new("c0", "Init"),
    ];
    let dev = vec![
        CommitRecord::new("b2", "Add login"),
        CommitRecord::new("c0", "Init"),
    ];
    let comparison = compare(
        BranchLog::new("main", main),
        BranchLog::new("dev", dev),
        CompareOptions::default(),
    );
    CompareView::new(&comparison, &Renderer::new(14))
}

#[test]
fn test_compare_view_renders_columns() {
    let mut view = sample_view();

    let mut terminal = Terminal::new(TestBackend::new(36, 6)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area()))
        .unwrap();

    assert_snapshot!(terminal.backend(), @r#"
    "┌ main vs dev ─────────────────────┐"
    "│main          dev                 │"
    "│a1 Add login  b2 Add login        │"
    "│m2 Hotfix     c0 Init             │"
    "│c0 Init                           │"
    "└ shared renamed unique ───────────┘"
    "#);
}

#[test]
fn test_compare_view_scrolled() {
    let mut view = sample_view();

    let mut terminal = Terminal::new(TestBackend::new(36, 4)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area()))
        .unwrap();
    view.scroll_down(1);
    terminal
        .draw(|frame| view.render(frame, frame.area()))
        .unwrap();

    assert_snapshot!(terminal.backend(), @r#"
    "┌ main vs dev ─────────────────────┐"
    "│a1 Add login  b2 Add login        │"
    "│m2 Hotfix     c0 Init             │"
    "└ shared renamed unique ───────────┘"
    "#);
}

#[test]
fn test_compare_view_scroll_clamped_to_page() {
    let mut view = sample_view();

    let mut terminal = Terminal::new(TestBackend::new(36, 4)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area()))
        .unwrap();
    view.scroll_to_bottom();

    // 4 lines, 2 visible
    assert_eq!(view.scroll_offset(), 2);
}

#[test]
fn test_compare_view_resize_reclamps_scroll() {
    let mut view = sample_view();

    let mut small = Terminal::new(TestBackend::new(36, 4)).unwrap();
    small
        .draw(|frame| view.render(frame, frame.area()))
        .unwrap();
    view.scroll_to_bottom();

    let mut large = Terminal::new(TestBackend::new(36, 10)).unwrap();
    large
        .draw(|frame| view.render(frame, frame.area()))
        .unwrap();
    assert_eq!(view.scroll_offset(), 0);
}
