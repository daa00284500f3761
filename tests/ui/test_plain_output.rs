//! Snapshot tests for printed two-column output

use insta::assert_debug_snapshot;

use sidelog::compare::{CompareOptions, compare};
use sidelog::model::{BranchLog, CommitRecord};
use sidelog::ui::render::Renderer;

#[test]
fn test_plain_output_with_right_only_rows() {
    let main = vec![
        CommitRecord::new(
            "a1",
            "Implement extremely long feature description exceeding limit",
        ),
        CommitRecord::new("c0", "Initial commit"),
    ];
    let dev = vec![
        CommitRecord::new("d2", "Bump version"),
        CommitRecord::new("d1", "Add CI"),
        CommitRecord::new("c0", "Initial commit"),
    ];
    let comparison = compare(
        BranchLog::new("main", main),
        BranchLog::new("dev", dev),
        CompareOptions::default(),
    );

    let lines = Renderer::new(36).with_style(false).render(&comparison);

    assert_debug_snapshot!(lines, @r#"
    [
        "main                                dev",
        "a1 Implement extremely long fea...  d2 Bump version",
        "c0 Initial commit                   d1 Add CI",
        "                                    c0 Initial commit",
    ]
    "#);
}

#[test]
fn test_plain_output_converged() {
    let shared: Vec<CommitRecord> = (0..5)
        .map(|i| CommitRecord::new(format!("s{i}"), format!("Shared {i}")))
        .collect();
    let mut main = vec![CommitRecord::new("m1", "Main only")];
    main.extend(shared.iter().cloned());
    let mut dev = vec![CommitRecord::new("d1", "Dev only")];
    dev.extend(shared);

    let comparison = compare(
        BranchLog::new("main", main),
        BranchLog::new("dev", dev),
        CompareOptions::default(),
    );
    let lines = Renderer::new(16).with_style(false).render(&comparison);

    assert_debug_snapshot!(lines, @r#"
    [
        "main            dev",
        "m1 Main only    d1 Dev only",
        "s0 Shared 0     s0 Shared 0",
    ]
    "#);
}
