//! Erlang staffing estimator tests.

use capacity_core::erlang::{
    agents_for_service_level, erlang_b, erlang_c, service_level, traffic_intensity, utilization,
};

/// 100 contacts/hour at 360s AHT is exactly 10 erlangs.
#[test]
fn traffic_intensity_in_erlangs() {
    assert_eq!(traffic_intensity(100.0, 360.0), 10.0);
    assert_eq!(traffic_intensity(0.0, 360.0), 0.0);
}

/// Waiting (Erlang C) is always at least blocking (Erlang B) on the
/// same inputs, and both live in [0, 1].
#[test]
fn erlang_c_dominates_erlang_b() {
    let traffic = 10.0;
    for agents in 11..=25 {
        let b = erlang_b(traffic, agents);
        let c = erlang_c(traffic, agents);
        assert!((0.0..=1.0).contains(&b), "B({agents}) = {b} out of range");
        assert!((0.0..=1.0).contains(&c), "C({agents}) = {c} out of range");
        assert!(c >= b, "C({agents}) = {c} < B({agents}) = {b}");
    }
}

/// Blocking grows with offered load and shrinks with capacity.
#[test]
fn blocking_moves_with_load_and_capacity() {
    assert!(erlang_b(20.0, 10) > erlang_b(5.0, 10));
    assert!(erlang_b(10.0, 20) < erlang_b(10.0, 10));
    assert_eq!(erlang_b(10.0, 0), 1.0, "zero agents under load block everything");
}

/// Service level is clamped to [0, 1] across the whole agent sweep.
#[test]
fn service_level_stays_in_unit_interval() {
    for agents in 0..=30 {
        let sla = service_level(100.0, 300.0, 20.0, agents);
        assert!(
            (0.0..=1.0).contains(&sla),
            "SLA({agents} agents) = {sla} out of [0, 1]"
        );
    }
}

/// An overloaded or capacity-less system gives zero service; no
/// workload gives perfect service.
#[test]
fn degenerate_service_levels() {
    // intensity 10, 5 agents: queue grows without bound
    assert_eq!(service_level(100.0, 360.0, 20.0, 5), 0.0);
    assert_eq!(service_level(100.0, 360.0, 20.0, 0), 0.0);
    assert_eq!(service_level(0.0, 360.0, 20.0, 0), 1.0);
    assert_eq!(service_level(100.0, 0.0, 20.0, 5), 1.0);
}

/// The agent search returns the smallest count meeting the target.
#[test]
fn agent_search_meets_target_minimally() {
    let (target, service_time, volume, aht) = (0.80, 20.0, 100.0, 300.0);
    let agents = agents_for_service_level(target, service_time, volume, aht);

    let achieved = service_level(volume, aht, service_time, agents);
    assert!(
        achieved >= target,
        "{agents} agents only reach {achieved:.3}, target {target}"
    );
    assert!(
        agents as f64 >= traffic_intensity(volume, aht),
        "a stable answer needs at least the traffic intensity"
    );
    if agents > 0 {
        let below = service_level(volume, aht, service_time, agents - 1);
        assert!(
            below < target,
            "{} agents already reach {below:.3}; {agents} is not minimal",
            agents - 1
        );
    }
}

/// Utilization is intensity over agents, capped at 1.
#[test]
fn utilization_capped_at_one() {
    assert_eq!(utilization(100.0, 360.0, 20), 0.5);
    assert_eq!(utilization(100.0, 360.0, 5), 1.0);
    assert_eq!(utilization(100.0, 360.0, 0), 0.0);
}
