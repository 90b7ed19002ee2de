//! Human readable rendering of api replies

use std::fmt::Write;

use convert_case::{Case, Casing};
use strum::IntoEnumIterator;

use crate::models::{ActionResults, Light, NamedColor};

/// Render a light listing
///
/// Compact output is one `label power` line per light, with labels padded
/// to the longest label. Verbose output lists every known field.
///
/// # Examples
///
/// ```
/// use lifx::models::Light;
/// use lifx::output::format_lights;
///
/// let lights = vec![
///     Light { label: "A".into(), power: "on".into(), ..Default::default() },
///     Light { label: "Bathroom".into(), power: "off".into(), ..Default::default() },
/// ];
/// assert_eq!(format_lights(&lights, false), "A        on\nBathroom off\n");
/// ```
///
pub fn format_lights(lights: &[Light], verbose: bool) -> String {
    if verbose {
        verbose_lights(lights)
    } else {
        compact_lights(lights)
    }
}

fn compact_lights(lights: &[Light]) -> String {
    let width = lights
        .iter()
        .map(|light| light.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for light in lights {
        let _ = writeln!(out, "{:width$} {}", light.label, light.power, width = width);
    }
    out
}

fn verbose_lights(lights: &[Light]) -> String {
    let mut out = String::from("[Label] - [Location]/[Group]\n\n");
    for light in lights {
        let _ = writeln!(
            out,
            "{} - {}/{}",
            light.label, light.location.name, light.group.name
        );
        let _ = writeln!(out, "  power      : {}", light.power);
        let _ = writeln!(out, "  hue        : {}", light.color.hue);
        let _ = writeln!(out, "  saturation : {}", light.color.saturation);
        let _ = writeln!(out, "  kelvin     : {}", light.color.kelvin);
        let _ = writeln!(out, "  brightness : {}", light.brightness);
    }
    out
}

/// Render the per light outcome of a state, toggle or effect request
///
/// # Examples
///
/// ```
/// use lifx::models::{ActionResult, ActionResults};
/// use lifx::output::format_results;
///
/// let results = ActionResults {
///     results: vec![
///         ActionResult { id: "1".into(), label: "Desk".into(), status: "ok".into() },
///         ActionResult { id: "2".into(), label: "Hall lamp".into(), status: "offline".into() },
///     ],
/// };
/// assert_eq!(format_results(&results), "Desk      ok\nHall lamp offline\n");
/// ```
///
pub fn format_results(results: &ActionResults) -> String {
    let width = results
        .results
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for result in &results.results {
        let _ = writeln!(out, "{:width$} {}", result.label, result.status, width = width);
    }
    out
}

/// Render the color names accepted by `--color`
///
/// # Examples
///
/// ```
/// use lifx::output::format_colors;
///
/// let colors = format_colors();
/// assert!(colors.starts_with("white => White\n"));
/// assert_eq!(colors.lines().count(), 9);
/// ```
///
pub fn format_colors() -> String {
    let mut out = String::new();
    for color in NamedColor::iter() {
        let name = color.to_string();
        let _ = writeln!(out, "{} => {}", name, name.to_case(Case::Title));
    }
    out
}
