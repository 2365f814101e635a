mod common;

#[test]
fn report_prints_settled_totals() {
    let Some(output) = common::run_firmware("payroll", None) else {
        return;
    };

    // the 12-day candidate is rejected before the roster is printed
    assert!(
        output.contains("worker 1004 rejected: more days than the pay period holds"),
        "qemu stdout:\n{}",
        output
    );
    assert!(
        output.contains("3 workers on the roster"),
        "qemu stdout:\n{}",
        output
    );

    assert!(
        output.contains("worker 1001: 8 days at 120 => 960 paid (full-time)"),
        "qemu stdout:\n{}",
        output
    );
    assert!(
        output.contains("worker 1002: 3 days at 95 => 285 paid (part-time)"),
        "qemu stdout:\n{}",
        output
    );
    assert!(
        output.contains("worker 1003: 0 days at 150 => 0 paid (idle)"),
        "qemu stdout:\n{}",
        output
    );

    // each ledger total matches the settled pay
    assert!(
        output.contains("worker 1001: ledger total 960 over 10 days"),
        "qemu stdout:\n{}",
        output
    );
    assert!(
        output.contains("worker 1002: ledger total 285 over 10 days"),
        "qemu stdout:\n{}",
        output
    );

    assert!(output.contains("report complete"), "qemu stdout:\n{}", output);
}
