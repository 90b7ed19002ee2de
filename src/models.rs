//! Lifx models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::{Error, Result};

/// Which light(s) a request applies to
///
/// # Examples
///
/// ```
/// use lifx::models::Selector;
///
/// assert_eq!(Selector::default().to_string(), "all");
/// assert_eq!(Selector::Label("kitchen".into()).to_string(), "label:kitchen");
/// assert_eq!(Selector::Group("upstairs".into()).to_string(), "group:upstairs");
/// assert_eq!(Selector::Location("home".into()).to_string(), "location:home");
/// ```
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selector {
    /// Every light on the account
    #[default]
    All,

    /// Lights whose label matches
    Label(String),

    /// Lights in the group with this name
    Group(String),

    /// Lights in the location with this name
    Location(String),
}

impl Selector {
    /// Resolve the optional selector flags into a single selector
    ///
    /// # Returns
    ///   [Selector::All] when no flag is set, and
    ///   [Error::ConflictingSelectors] when more than one is set
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx::models::Selector;
    ///
    /// let sel = Selector::from_flags(None, Some("living"), None).unwrap();
    /// assert_eq!(sel, Selector::Group("living".into()));
    ///
    /// assert!(Selector::from_flags(Some("kitchen"), Some("living"), None).is_err());
    /// ```
    ///
    pub fn from_flags(
        label: Option<&str>,
        group: Option<&str>,
        location: Option<&str>,
    ) -> Result<Self> {
        match (label, group, location) {
            (None, None, None) => Ok(Selector::All),
            (Some(label), None, None) => Ok(Selector::Label(label.to_string())),
            (None, Some(group), None) => Ok(Selector::Group(group.to_string())),
            (None, None, Some(location)) => Ok(Selector::Location(location.to_string())),
            _ => Err(Error::ConflictingSelectors),
        }
    }

    /// Selector as a single url path segment
    ///
    /// The name is percent-encoded, so `#`, `?` or `/` in a label can't
    /// change which endpoint is hit.
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx::models::Selector;
    ///
    /// assert_eq!(Selector::All.path_segment(), "all");
    /// assert_eq!(
    ///     Selector::Label("Kitchen #2".into()).path_segment(),
    ///     "label:Kitchen%20%232"
    /// );
    /// ```
    ///
    pub fn path_segment(&self) -> String {
        match self {
            Selector::All => "all".to_string(),
            Selector::Label(label) => format!("label:{}", urlencoding::encode(label)),
            Selector::Group(group) => format!("group:{}", urlencoding::encode(group)),
            Selector::Location(location) => {
                format!("location:{}", urlencoding::encode(location))
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => write!(f, "all"),
            Selector::Label(label) => write!(f, "label:{label}"),
            Selector::Group(group) => write!(f, "group:{group}"),
            Selector::Location(location) => write!(f, "location:{location}"),
        }
    }
}

/// Desired power state of a light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PowerMode {
    /// Tell the bulb to emit light
    On,

    /// Tell the bulb to stop emitting light
    Off,
}

/// Color names the api knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NamedColor {
    White,
    Red,
    Orange,
    Yellow,
    Cyan,
    Green,
    Blue,
    Purple,
    Pink,
}

/// A color given either by name or as a `#RRGGBB` hex string
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use lifx::models::{ColorValue, NamedColor};
///
/// assert_eq!(ColorValue::from_str("red").unwrap(), ColorValue::Named(NamedColor::Red));
/// assert_eq!(ColorValue::from_str("#FF00aa").unwrap().to_string(), "#FF00aa");
///
/// assert!(ColorValue::from_str("mauve").is_err());
/// assert!(ColorValue::from_str("#ff00").is_err());
/// ```
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValue {
    Named(NamedColor),
    Hex(String),
}

impl FromStr for ColorValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(digits) = s.strip_prefix('#') {
            if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Ok(ColorValue::Hex(s.to_string()));
            }
            return Err(Error::InvalidColor(s.to_string()));
        }
        NamedColor::from_str(s)
            .map(ColorValue::Named)
            .map_err(|_| Error::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Named(name) => write!(f, "{name}"),
            ColorValue::Hex(hex) => write!(f, "{hex}"),
        }
    }
}

/// Color is any RGB color, values from 0 to 255
///
/// # Examples
///
/// ```
/// use lifx::models::Rgb;
///
/// assert_eq!(Rgb::new(255, 0, 128).to_string(), "rgb:255,0,128");
/// ```
///
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Create a new color from its components
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb { red, green, blue }
    }

    /// Accessor for this color's read-only red value
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Accessor for this color's read-only green value
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Accessor for this color's read-only blue value
    pub fn blue(&self) -> u8 {
        self.blue
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb:{},{},{}", self.red, self.green, self.blue)
    }
}

/// Requested color change, every component optional
///
/// An empty color spec means "leave the color alone" and encodes to [None].
///
/// # Examples
///
/// ```
/// use lifx::models::ColorSpec;
///
/// assert_eq!(ColorSpec::default().encode().unwrap(), None);
///
/// let spec = ColorSpec {
///     hue: Some(120.0),
///     saturation: Some(0.5),
///     ..Default::default()
/// };
/// assert_eq!(spec.encode().unwrap().as_deref(), Some("hue:120 saturation:0.5"));
/// ```
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorSpec {
    pub color: Option<ColorValue>,
    pub rgb: Option<Rgb>,
    pub hue: Option<f64>,
    pub saturation: Option<f64>,
    pub brightness: Option<f64>,
    pub kelvin: Option<u16>,
}

impl ColorSpec {
    /// True when no component is set
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.rgb.is_none()
            && self.hue.is_none()
            && self.saturation.is_none()
            && self.brightness.is_none()
            && self.kelvin.is_none()
    }

    /// Encode as the api's space delimited color string
    ///
    /// Components are always written in the order color (or rgb), hue,
    /// saturation, brightness, kelvin.
    ///
    /// # Returns
    ///   [None] when nothing is set, and [Error::ConflictingColor]
    ///   when both a color and an rgb value are set
    ///
    pub fn encode(&self) -> Result<Option<String>> {
        let mut parts = Vec::new();

        match (&self.color, &self.rgb) {
            (Some(_), Some(_)) => return Err(Error::ConflictingColor),
            (Some(color), None) => parts.push(color.to_string()),
            (None, Some(rgb)) => parts.push(rgb.to_string()),
            (None, None) => {}
        }

        // zero is a valid value, only skip what is unset
        if let Some(hue) = self.hue {
            parts.push(format!("hue:{hue}"));
        }
        if let Some(saturation) = self.saturation {
            parts.push(format!("saturation:{saturation}"));
        }
        if let Some(brightness) = self.brightness {
            parts.push(format!("brightness:{brightness}"));
        }
        if let Some(kelvin) = self.kelvin {
            parts.push(format!("kelvin:{kelvin}"));
        }

        if parts.is_empty() {
            Ok(None)
        } else {
            Ok(Some(parts.join(" ")))
        }
    }
}

/// Parameters shared by the pulse and breathe effects
///
/// # Examples
///
/// ```
/// use lifx::models::EffectParams;
///
/// let params = EffectParams::default();
/// assert_eq!(params.period, 1.0);
/// assert_eq!(params.cycles, 1.0);
/// assert_eq!(params.peak, 0.5);
/// assert!(params.power_on);
/// assert!(!params.persist);
/// assert!(params.validate().is_ok());
/// ```
///
#[derive(Debug, Clone, PartialEq)]
pub struct EffectParams {
    /// Seconds for one cycle of the effect
    pub period: f64,

    /// Number of times to repeat the effect
    pub cycles: f64,

    /// Where in a period the target color is at its maximum, 0 to 1
    pub peak: f64,

    /// Keep the last color of the effect when done
    pub persist: bool,

    /// Turn the light on first if it is off
    pub power_on: bool,

    /// Color to use for the effect
    pub color: ColorSpec,

    /// Color to start the effect from, defaults to the current color
    pub from_color: ColorSpec,
}

impl Default for EffectParams {
    fn default() -> Self {
        EffectParams {
            period: 1.0,
            cycles: 1.0,
            peak: 0.5,
            persist: false,
            power_on: true,
            color: ColorSpec::default(),
            from_color: ColorSpec::default(),
        }
    }
}

impl EffectParams {
    /// Check the numeric parameters are within range
    ///
    /// # Examples
    ///
    /// ```
    /// use lifx::models::EffectParams;
    ///
    /// let params = EffectParams { peak: 1.5, ..Default::default() };
    /// assert!(params.validate().is_err());
    /// ```
    ///
    pub fn validate(&self) -> Result<()> {
        // negated comparisons so NaN is rejected as well
        if !(self.period >= 0.0) {
            return Err(Error::out_of_range("period", self.period, ">= 0"));
        }
        if !(self.cycles >= 0.0) {
            return Err(Error::out_of_range("cycles", self.cycles, ">= 0"));
        }
        if !(0.0..=1.0).contains(&self.peak) {
            return Err(Error::out_of_range("peak", self.peak, "between 0 and 1"));
        }
        Ok(())
    }
}

/// Form body sent to the api
///
/// Every field is optional, unset fields are left out of the body
/// entirely since the api treats a present field as a change request.
///
/// # Examples
///
/// ```
/// use lifx::models::{Payload, PowerMode};
///
/// let mut payload = Payload::new();
/// assert!(payload.is_empty());
///
/// payload.power(PowerMode::On);
/// payload.duration(2.5);
/// assert_eq!(
///     serde_json::to_value(&payload).unwrap(),
///     serde_json::json!({"power": "on", "duration": "2.5"}),
/// );
/// ```
///
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Clone, PartialEq)]
pub struct Payload {
    power: Option<PowerMode>,
    color: Option<String>,
    duration: Option<String>,
    period: Option<String>,
    cycles: Option<String>,
    peak: Option<String>,
    persist: Option<bool>,
    power_on: Option<bool>,
    from_color: Option<String>,
}

impl Payload {
    /// Create a new blank payload
    pub fn new() -> Self {
        Payload::default()
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == Payload::default()
    }

    /// Set the power state
    pub fn power(&mut self, power: PowerMode) {
        self.power = Some(power);
    }

    /// Set an encoded color string
    pub fn color(&mut self, color: String) {
        self.color = Some(color);
    }

    /// Set the transition time in seconds
    pub fn duration(&mut self, duration: f64) {
        self.duration = Some(duration.to_string());
    }

    /// Set the encoded color the effect starts from
    pub fn from_color(&mut self, color: String) {
        self.from_color = Some(color);
    }

    /// Set every effect field from the given parameters
    ///
    /// Colors are encoded here, so this fails on a conflicting [ColorSpec].
    pub fn effect(&mut self, params: &EffectParams) -> Result<()> {
        self.period = Some(params.period.to_string());
        self.cycles = Some(params.cycles.to_string());
        self.peak = Some(params.peak.to_string());
        self.persist = Some(params.persist);
        self.power_on = Some(params.power_on);
        if let Some(color) = params.color.encode()? {
            self.color(color);
        }
        if let Some(color) = params.from_color.encode()? {
            self.from_color(color);
        }
        Ok(())
    }
}

/// Name of a location or group
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Named {
    pub name: String,
}

/// Current color of a light as reported by the api
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightColor {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub kelvin: u32,
}

/// One light as returned by the list endpoint
///
/// Unknown fields are ignored and missing ones take their default.
///
/// # Examples
///
/// ```
/// use lifx::models::Light;
///
/// let light: Light = serde_json::from_str(r#"{
///     "label": "Kitchen",
///     "power": "on",
///     "brightness": 0.8,
///     "color": {"hue": 120.0, "saturation": 1.0, "brightness": 0.8, "kelvin": 3500},
///     "group": {"id": "1", "name": "Downstairs"},
///     "location": {"id": "2", "name": "Home"}
/// }"#).unwrap();
///
/// assert_eq!(light.label, "Kitchen");
/// assert_eq!(light.group.name, "Downstairs");
/// assert_eq!(light.color.kelvin, 3500);
/// assert_eq!(light.color.brightness, 0.8);
/// ```
///
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Light {
    pub label: String,
    pub power: String,
    pub brightness: f64,
    pub color: LightColor,
    pub group: Named,
    pub location: Named,
}

/// Outcome for a single light of a state, toggle or effect request
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActionResult {
    pub id: String,
    pub label: String,
    pub status: String,
}

/// Body of a successful state, toggle or effect reply
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActionResults {
    pub results: Vec<ActionResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_flags_resolve() {
        assert_eq!(Selector::from_flags(None, None, None).unwrap(), Selector::All);
        assert_eq!(
            Selector::from_flags(Some("lamp"), None, None).unwrap(),
            Selector::Label("lamp".into())
        );
        assert_eq!(
            Selector::from_flags(None, None, Some("home")).unwrap(),
            Selector::Location("home".into())
        );
    }

    #[test]
    fn selector_flags_conflict() {
        assert_eq!(
            Selector::from_flags(Some("kitchen"), Some("living"), None).unwrap_err(),
            Error::ConflictingSelectors
        );
        assert_eq!(
            Selector::from_flags(None, Some("living"), Some("home")).unwrap_err(),
            Error::ConflictingSelectors
        );
        assert!(Selector::from_flags(Some("a"), Some("b"), Some("c")).is_err());
    }

    #[test]
    fn selector_names_are_encoded_in_paths() {
        assert_eq!(
            Selector::Group("Up/Down".into()).path_segment(),
            "group:Up%2FDown"
        );
        assert_eq!(
            Selector::Location("Home?x=1".into()).path_segment(),
            "location:Home%3Fx%3D1"
        );
        // display stays readable for logs
        assert_eq!(Selector::Label("Kitchen #2".into()).to_string(), "label:Kitchen #2");
    }

    #[test]
    fn color_encodes_in_fixed_order() {
        let spec = ColorSpec {
            color: Some(ColorValue::Named(NamedColor::Blue)),
            kelvin: Some(3500),
            brightness: Some(0.25),
            saturation: Some(1.0),
            hue: Some(200.5),
            ..Default::default()
        };
        assert_eq!(
            spec.encode().unwrap().unwrap(),
            "blue hue:200.5 saturation:1 brightness:0.25 kelvin:3500"
        );
    }

    #[test]
    fn color_keeps_each_component() {
        // brightness and kelvin carry their own values
        let spec = ColorSpec {
            hue: Some(10.0),
            brightness: Some(0.75),
            kelvin: Some(2700),
            ..Default::default()
        };
        assert_eq!(
            spec.encode().unwrap().unwrap(),
            "hue:10 brightness:0.75 kelvin:2700"
        );
    }

    #[test]
    fn color_zero_is_not_absent() {
        let spec = ColorSpec {
            hue: Some(0.0),
            saturation: Some(0.0),
            ..Default::default()
        };
        assert_eq!(spec.encode().unwrap().unwrap(), "hue:0 saturation:0");
    }

    #[test]
    fn color_rgb_first() {
        let spec = ColorSpec {
            rgb: Some(Rgb::new(0, 128, 255)),
            brightness: Some(0.5),
            ..Default::default()
        };
        assert_eq!(spec.encode().unwrap().unwrap(), "rgb:0,128,255 brightness:0.5");
    }

    #[test]
    fn color_and_rgb_conflict() {
        let spec = ColorSpec {
            color: Some(ColorValue::Named(NamedColor::Red)),
            rgb: Some(Rgb::new(255, 0, 0)),
            ..Default::default()
        };
        assert!(!spec.is_empty());
        assert_eq!(spec.encode().unwrap_err(), Error::ConflictingColor);
    }

    #[test]
    fn empty_color_is_none() {
        let spec = ColorSpec::default();
        assert!(spec.is_empty());
        assert_eq!(spec.encode().unwrap(), None);
    }

    #[test]
    fn color_values_pass_through() {
        for name in ["white", "red", "orange", "yellow", "cyan", "green", "blue", "purple", "pink"] {
            assert_eq!(ColorValue::from_str(name).unwrap().to_string(), name);
        }
        assert_eq!(ColorValue::from_str("#00ff7F").unwrap().to_string(), "#00ff7F");
        assert!(ColorValue::from_str("Red").is_err());
        assert!(ColorValue::from_str("#gg0000").is_err());
        assert!(ColorValue::from_str("00ff00").is_err());
    }

    #[test]
    fn effect_validation() {
        assert!(EffectParams { period: -1.0, ..Default::default() }.validate().is_err());
        assert!(EffectParams { cycles: -0.5, ..Default::default() }.validate().is_err());
        assert!(EffectParams { peak: f64::NAN, ..Default::default() }.validate().is_err());
        assert!(EffectParams { peak: 0.0, period: 0.0, cycles: 0.0, ..Default::default() }
            .validate()
            .is_ok());
        assert!(EffectParams { peak: 1.0, ..Default::default() }.validate().is_ok());
    }

    #[test]
    fn effect_payload_fields() {
        let params = EffectParams {
            period: 2.0,
            cycles: 3.5,
            color: ColorSpec {
                color: Some(ColorValue::Named(NamedColor::Pink)),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut payload = Payload::new();
        payload.effect(&params).unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "period": "2",
                "cycles": "3.5",
                "peak": "0.5",
                "persist": false,
                "power_on": true,
                "color": "pink",
            })
        );
    }

    #[test]
    fn light_list_decodes() {
        let lights: Vec<Light> = serde_json::from_str(
            r#"[{"label": "A", "power": "on"}, {"label": "Bathroom", "power": "off"}]"#,
        )
        .unwrap();
        assert_eq!(lights.len(), 2);
        assert_eq!(lights[1].label, "Bathroom");
        assert_eq!(lights[1].location, Named::default());
    }
}
