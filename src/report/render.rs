use super::telemetry::Telemetry;
use crate::models::OrbitalState;

const SEPARATOR: &str = "----------------------------------------";
const DATE_FORMAT: &str = "%d %b %Y";

/// Formats the flight report. Field order and two-decimal precision are fixed.
pub fn render(state: &OrbitalState) -> String {
    let lines = [
        String::new(),
        "--- ORBITAL FLIGHT REPORT: EARTH ---".to_string(),
        format!("HUMAN DATE: {}", state.date.format(DATE_FORMAT)),
        SEPARATOR.to_string(),
        format!("📍 POSITION:       {:.2}° from perihelion", state.orbital_degrees),
        format!("🚀 VELOCITY:       {:.2} km/s", state.speed_km_s),
        format!("📏 SUN DISTANCE:   {:.2} million km", state.distance_million_km()),
        format!("🌊 DYNAMICS:       {}", state.phase.description()),
        SEPARATOR.to_string(),
        format!("NOTE: {}", state.note.sentence()),
    ];
    lines.join("\n") + "\n"
}

pub fn render_telemetry(telemetry: &Telemetry) -> String {
    let position = telemetry.heliocentric_position / 1_000_000.0;
    let velocity = telemetry.heliocentric_velocity;
    let env = &telemetry.environment;
    let next = &telemetry.next_milestone;

    let lines = [
        String::new(),
        "--- EXTENDED TELEMETRY ---".to_string(),
        format!("ROTATION:         day {}", telemetry.day_of_year),
        format!("TRAVEL STAGE:     {}", telemetry.stage),
        format!("DAILY ADVANCE:    {:.0} km", telemetry.daily_advance_km),
        format!(
            "POSITION VECTOR:  ({:.2}, {:.2}, {:.2}) million km",
            position.x, position.y, position.z
        ),
        format!(
            "VELOCITY VECTOR:  ({:.2}, {:.2}, {:.2}) km/s",
            velocity.x, velocity.y, velocity.z
        ),
        format!("SOLAR GRAVITY:    {:.2} mm/s²", telemetry.solar_acceleration_mm_s2),
        format!("SOLAR FLUX:       {:.1} W/m²", env.solar_flux),
        format!(
            "AXIAL TILT:       {:.1}° {}",
            env.axial_tilt_deg.abs(),
            env.sunward_hemisphere()
        ),
        format!("LIGHT:            {}", env.light),
        format!(
            "TEMPERATURE:      N {:.1} °C / S {:.1} °C",
            env.north_temp_c, env.south_temp_c
        ),
        format!(
            "MOON:             {} ({:.0}% of the lunar cycle)",
            telemetry.moon.phase,
            telemetry.moon.cycle_percent()
        ),
        format!(
            "NEXT MILESTONE:   {} on {}",
            next.milestone,
            next.date.format(DATE_FORMAT)
        ),
        format!("                  {}", next.milestone.description()),
        SEPARATOR.to_string(),
    ];
    lines.join("\n") + "\n"
}
