//! Erlang traffic functions for interval-level staffing checks.
//!
//! These estimate agents-to-service-level for a single interval,
//! independent of the period chain. Volume is contacts per hour and
//! AHT is in seconds throughout.
//!
//! RULES:
//!   - Degenerate inputs never panic or return NaN: no workload means
//!     perfect service, no capacity means total failure.
//!   - An overloaded system (agents <= traffic) queues forever, so the
//!     waiting probability saturates at 1.

/// Offered load in erlangs for an hourly volume and an AHT in seconds.
pub fn traffic_intensity(volume: f64, aht_seconds: f64) -> f64 {
    (volume * aht_seconds) / 3600.0
}

/// Erlang B blocking probability, computed with the stable recurrence
/// instead of factorials, so agent counts never overflow. Zero agents
/// under load blocks everything.
pub fn erlang_b(traffic: f64, agents: u32) -> f64 {
    if traffic <= 0.0 {
        return 0.0;
    }
    let mut eb = 1.0;
    for i in 1..=agents {
        eb = (traffic * eb) / (i as f64 + traffic * eb);
    }
    eb
}

/// Erlang C probability that an arrival has to wait.
pub fn erlang_c(traffic: f64, agents: u32) -> f64 {
    if traffic <= 0.0 || agents == 0 {
        return 1.0;
    }
    let n = agents as f64;
    if n <= traffic {
        return 1.0;
    }
    let rho = traffic / n;
    let b = erlang_b(traffic, agents);
    b / (1.0 - rho + rho * b)
}

/// Fraction of contacts answered within `service_time_seconds`.
/// Clamped to [0, 1].
pub fn service_level(volume: f64, aht_seconds: f64, service_time_seconds: f64, agents: u32) -> f64 {
    if volume <= 0.0 || aht_seconds <= 0.0 {
        return 1.0;
    }
    if agents == 0 {
        return 0.0;
    }
    let traffic = traffic_intensity(volume, aht_seconds);
    let n = agents as f64;
    if n <= traffic {
        return 0.0;
    }
    let waiting = erlang_c(traffic, agents);
    let sla = 1.0 - waiting * (-(n - traffic) * service_time_seconds / aht_seconds).exp();
    sla.clamp(0.0, 1.0)
}

/// Smallest agent count meeting `target_sla`, searched upward from the
/// traffic intensity. Gives up after 100 extra agents and returns the
/// starting point, which only happens for unreachable targets.
pub fn agents_for_service_level(
    target_sla: f64,
    service_time_seconds: f64,
    volume: f64,
    aht_seconds: f64,
) -> u32 {
    let start = traffic_intensity(volume, aht_seconds).ceil().max(0.0) as u32;
    for agents in start..=start + 100 {
        if service_level(volume, aht_seconds, service_time_seconds, agents) >= target_sla {
            return agents;
        }
    }
    start
}

/// Agent utilization, capped at 1.
pub fn utilization(volume: f64, aht_seconds: f64, agents: u32) -> f64 {
    if agents == 0 {
        return 0.0;
    }
    (traffic_intensity(volume, aht_seconds) / agents as f64).min(1.0)
}
