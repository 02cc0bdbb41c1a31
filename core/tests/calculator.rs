//! Per-period calculator tests: the three staffing formulas and the
//! derived-field pass over one record.

use capacity_core::{
    calculator::calculate_team_metrics_for_period,
    metrics::TeamPeriodInputs,
    model::{ModelKind, PeriodCall},
};

fn call_with_volume(volume: f64) -> PeriodCall {
    PeriodCall {
        lob_total_base_required_minutes: None,
        standard_work_minutes: 2400.0,
        volume,
        metric_required_hc: 0.0,
        actual_hc: 0.0,
        last_hc: 0.0,
        is_bpo: false,
    }
}

/// The CPH worked example: 10000 contacts, 10% backlog, 50% mix, 10%/5%
/// shrinkage, 80% occupancy, AHT 300s comes out just over two-thirds of
/// a head.
#[test]
fn cph_required_matches_worked_example() {
    let inputs = TeamPeriodInputs {
        aht: Some(300.0),
        in_office_shrinkage_percentage: Some(10.0),
        out_of_office_shrinkage_percentage: Some(5.0),
        occupancy_percentage: Some(80.0),
        backlog_percentage: Some(10.0),
        volume_mix_percentage: Some(50.0),
        ..Default::default()
    };
    let record = calculate_team_metrics_for_period(ModelKind::Cph, &inputs, &call_with_volume(10000.0));

    let required = record.required_hc.expect("required_hc is always set");
    let expected = (10000.0 * 1.10 * 0.50) / (40.0 * 0.90 * 0.95 * 0.80 * 300.0);
    assert!(
        (required - expected).abs() < 1e-12,
        "CPH required {required} != hand computation {expected}"
    );
    assert!(
        (required - 0.67).abs() < 0.005,
        "CPH worked example should be ~0.67, got {required:.4}"
    );
}

/// Volume-Backlog converts handle-minutes to productive hours and then
/// to 40-hour heads.
#[test]
fn volume_backlog_required_matches_hand_computation() {
    let inputs = TeamPeriodInputs {
        aht: Some(6.0),
        in_office_shrinkage_percentage: Some(10.0),
        out_of_office_shrinkage_percentage: Some(5.0),
        occupancy_percentage: Some(80.0),
        backlog_percentage: Some(0.0),
        volume_mix_percentage: Some(100.0),
        ..Default::default()
    };
    let record =
        calculate_team_metrics_for_period(ModelKind::VolumeBacklog, &inputs, &call_with_volume(6000.0));

    let required = record.required_hc.expect("required_hc is always set");
    let expected = (6000.0 * 1.0 * 6.0) / (60.0 * 0.80 * 0.90 * 0.95) / 40.0;
    assert!(
        (required - expected).abs() < 1e-12,
        "Volume-Backlog required {required} != hand computation {expected}"
    );
}

/// Fixed-HC grosses the metric requirement up for both shrinkages and
/// scales it to the team's mix.
#[test]
fn fixed_hc_required_grosses_up_metric_requirement() {
    let inputs = TeamPeriodInputs {
        in_office_shrinkage_percentage: Some(10.0),
        out_of_office_shrinkage_percentage: Some(5.0),
        volume_mix_percentage: Some(50.0),
        ..Default::default()
    };
    let call = PeriodCall {
        metric_required_hc: 40.0,
        ..call_with_volume(0.0)
    };
    let record = calculate_team_metrics_for_period(ModelKind::FixedHc, &inputs, &call);

    let required = record.required_hc.expect("required_hc is always set");
    let expected = 40.0 / 0.90 / 0.95 * 0.50;
    assert!(
        (required - expected).abs() < 1e-12,
        "Fixed-HC required {required} != hand computation {expected}"
    );
}

/// over_under_hc is exactly actual minus required, in that orientation:
/// positive means overstaffed.
#[test]
fn over_under_is_actual_minus_required() {
    let inputs = TeamPeriodInputs {
        aht: Some(300.0),
        in_office_shrinkage_percentage: Some(10.0),
        out_of_office_shrinkage_percentage: Some(5.0),
        occupancy_percentage: Some(80.0),
        backlog_percentage: Some(10.0),
        volume_mix_percentage: Some(50.0),
        actual_hc: Some(100.0),
        ..Default::default()
    };
    let record = calculate_team_metrics_for_period(ModelKind::Cph, &inputs, &call_with_volume(10000.0));

    let required = record.required_hc.unwrap();
    let actual = record.actual_hc.unwrap();
    let over_under = record.over_under_hc.unwrap();
    assert!(
        (over_under - (actual - required)).abs() < 1e-12,
        "over_under {over_under} != actual {actual} - required {required}"
    );
    assert!(over_under > 0.0, "100 heads against ~0.67 required must be overstaffed");
}

/// The calculator is a pure function: same inputs, bit-identical record.
#[test]
fn calculator_is_deterministic_for_equal_inputs() {
    let inputs = TeamPeriodInputs {
        aht: Some(300.0),
        in_office_shrinkage_percentage: Some(10.0),
        out_of_office_shrinkage_percentage: Some(5.0),
        occupancy_percentage: Some(80.0),
        backlog_percentage: Some(10.0),
        attrition_percentage: Some(5.0),
        volume_mix_percentage: Some(50.0),
        actual_hc: Some(100.0),
        move_in: Some(2.0),
        move_out: Some(3.0),
        new_hire_production: Some(10.0),
        ..Default::default()
    };
    let call = PeriodCall {
        lob_total_base_required_minutes: Some(50000.0),
        last_hc: 95.0,
        ..call_with_volume(10000.0)
    };

    let a = calculate_team_metrics_for_period(ModelKind::Cph, &inputs, &call);
    let b = calculate_team_metrics_for_period(ModelKind::Cph, &inputs, &call);
    assert_eq!(a, b, "Recalculating the same period must not change any field");
}

/// A zero AHT or zero occupancy zeroes the denominator; required HC
/// degrades to 0 instead of going infinite.
#[test]
fn zero_denominator_collapses_required_to_zero() {
    let mut inputs = TeamPeriodInputs {
        aht: Some(0.0),
        in_office_shrinkage_percentage: Some(10.0),
        out_of_office_shrinkage_percentage: Some(5.0),
        occupancy_percentage: Some(80.0),
        backlog_percentage: Some(10.0),
        volume_mix_percentage: Some(50.0),
        ..Default::default()
    };
    let record = calculate_team_metrics_for_period(ModelKind::Cph, &inputs, &call_with_volume(10000.0));
    assert_eq!(record.required_hc, Some(0.0), "zero AHT must yield 0 required, not inf");

    inputs.aht = Some(300.0);
    inputs.occupancy_percentage = Some(0.0);
    let record = calculate_team_metrics_for_period(ModelKind::Cph, &inputs, &call_with_volume(10000.0));
    assert_eq!(record.required_hc, Some(0.0), "zero occupancy must yield 0 required, not inf");
}

/// An entirely empty input record still produces a fully populated,
/// finite output record.
#[test]
fn absent_inputs_yield_finite_zero_outputs() {
    let record = calculate_team_metrics_for_period(
        ModelKind::Cph,
        &TeamPeriodInputs::default(),
        &call_with_volume(10000.0),
    );

    assert_eq!(record.required_hc, Some(0.0));
    assert_eq!(record.actual_hc, Some(0.0), "CPH overwrites an absent stored actual");
    assert_eq!(record.over_under_hc, Some(0.0));
    assert_eq!(record.calculated_actual_productive_agent_minutes, Some(0.0));
    assert_eq!(record.attrition_loss_hc, Some(0.0));
    assert_eq!(record.hc_after_attrition, Some(0.0));
    assert_eq!(record.ending_hc, Some(0.0));
    for (name, value) in [
        ("required_hc", record.required_hc),
        ("over_under_hc", record.over_under_hc),
        ("ending_hc", record.ending_hc),
    ] {
        assert!(value.unwrap().is_finite(), "{name} must be finite");
    }
}

/// The metric-requirement input is inert under CPH and Volume-Backlog
/// and effective under Fixed-HC.
#[test]
fn metric_requirement_only_drives_fixed_hc() {
    let inputs = TeamPeriodInputs {
        aht: Some(300.0),
        in_office_shrinkage_percentage: Some(10.0),
        out_of_office_shrinkage_percentage: Some(5.0),
        occupancy_percentage: Some(80.0),
        backlog_percentage: Some(10.0),
        volume_mix_percentage: Some(50.0),
        ..Default::default()
    };
    let without = call_with_volume(10000.0);
    let with = PeriodCall { metric_required_hc: 40.0, ..without };

    for model in [ModelKind::Cph, ModelKind::VolumeBacklog] {
        let a = calculate_team_metrics_for_period(model, &inputs, &without);
        let b = calculate_team_metrics_for_period(model, &inputs, &with);
        assert_eq!(
            a.required_hc, b.required_hc,
            "{} must ignore metric_required_hc",
            model.name()
        );
    }

    let a = calculate_team_metrics_for_period(ModelKind::FixedHc, &inputs, &without);
    let b = calculate_team_metrics_for_period(ModelKind::FixedHc, &inputs, &with);
    assert_ne!(
        a.required_hc, b.required_hc,
        "fixed_hc must consume metric_required_hc"
    );
}

/// Productive minutes: actual heads times paid minutes, discounted by
/// both shrinkages and occupancy. Zero standard minutes short-circuits.
#[test]
fn productive_minutes_discount_paid_time() {
    let inputs = TeamPeriodInputs {
        in_office_shrinkage_percentage: Some(10.0),
        out_of_office_shrinkage_percentage: Some(5.0),
        occupancy_percentage: Some(80.0),
        actual_hc: Some(100.0),
        ..Default::default()
    };
    let record = calculate_team_metrics_for_period(ModelKind::Cph, &inputs, &call_with_volume(0.0));
    let productive = record.calculated_actual_productive_agent_minutes.unwrap();
    let expected = 100.0 * 2400.0 * 0.90 * 0.95 * 0.80;
    assert!(
        (productive - expected).abs() < 1e-9,
        "productive minutes {productive} != {expected}"
    );

    let call = PeriodCall { standard_work_minutes: 0.0, ..call_with_volume(0.0) };
    let record = calculate_team_metrics_for_period(ModelKind::Cph, &inputs, &call);
    assert_eq!(
        record.calculated_actual_productive_agent_minutes,
        Some(0.0),
        "zero standard minutes must zero productive minutes"
    );
}

/// The traceability fields: the team's share of LOB base minutes is
/// computed with 0-coalesced reads, and the LOB total passes through
/// unchanged, None included.
#[test]
fn traceability_fields_follow_the_lob_total() {
    let inputs = TeamPeriodInputs {
        backlog_percentage: Some(10.0),
        volume_mix_percentage: Some(50.0),
        ..Default::default()
    };
    let call = PeriodCall {
        lob_total_base_required_minutes: Some(10000.0),
        ..call_with_volume(0.0)
    };
    let record = calculate_team_metrics_for_period(ModelKind::Cph, &inputs, &call);
    let minutes = record.calculated_required_agent_minutes.unwrap();
    assert!(
        (minutes - 10000.0 * 0.50 * 1.10).abs() < 1e-9,
        "team share of LOB minutes was {minutes}"
    );
    assert_eq!(record.lob_total_base_req_minutes_for_calc, Some(10000.0));

    let record =
        calculate_team_metrics_for_period(ModelKind::Cph, &inputs, &call_with_volume(0.0));
    assert_eq!(record.calculated_required_agent_minutes, Some(0.0));
    assert_eq!(record.lob_total_base_req_minutes_for_calc, None);
}
