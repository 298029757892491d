//! Built-in window presets.

use serde::{Deserialize, Serialize};

use super::raw_number::raw;
use super::window::{BarSpec, CorniceSpec, FrameMode, WindowSpec};

/// A named partial window merged over defaults when a window is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub label: String,
    pub spec: WindowSpec,
}

impl Preset {
    /// Apply this preset beneath user-entered values.
    pub fn apply(&self, spec: &WindowSpec) -> WindowSpec {
        spec.merged_over(&self.spec)
    }
}

fn cornice(enabled: bool, len_bar: f64, price_bar: f64) -> CorniceSpec {
    CorniceSpec {
        enabled: Some(enabled),
        add_waste: None,
        len_bar: raw(len_bar),
        price_bar: raw(price_bar),
    }
}

/// Presets shipped with the calculator.
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset {
            id: "classic".to_string(),
            label: "Classic reveal".to_string(),
            spec: WindowSpec {
                name: Some("Living room".to_string()),
                w: raw(150.0),
                h: raw(180.0),
                qty: raw(1u32),
                mode: Some(FrameMode::Full),
                discount: raw(0.0),
                frame: BarSpec {
                    len_bar: raw(200.0),
                    price_bar: raw(50.0),
                },
                lower_cornice: cornice(true, 200.0, 80.0),
                upper_cornice: cornice(true, 200.0, 80.0),
                ..Default::default()
            },
        },
        Preset {
            id: "loft".to_string(),
            label: "Loft".to_string(),
            spec: WindowSpec {
                name: Some("Kitchen".to_string()),
                w: raw(200.0),
                h: raw(200.0),
                qty: raw(2u32),
                mode: Some(FrameMode::TopAndSides),
                discount: raw(5.0),
                frame: BarSpec {
                    len_bar: raw(250.0),
                    price_bar: raw(60.0),
                },
                lower_cornice: cornice(false, 200.0, 90.0),
                upper_cornice: cornice(false, 200.0, 90.0),
                ..Default::default()
            },
        },
        Preset {
            id: "plain".to_string(),
            label: "No cornices".to_string(),
            spec: WindowSpec {
                name: Some("Bedroom".to_string()),
                w: raw(120.0),
                h: raw(150.0),
                qty: raw(1u32),
                mode: Some(FrameMode::SidesOnly),
                discount: raw(0.0),
                frame: BarSpec {
                    len_bar: raw(180.0),
                    price_bar: raw(40.0),
                },
                lower_cornice: cornice(false, 200.0, 80.0),
                upper_cornice: cornice(false, 200.0, 80.0),
                ..Default::default()
            },
        },
    ]
}

/// Look up a built-in preset by id.
pub fn find_preset(id: &str) -> Option<Preset> {
    builtin_presets().into_iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_unique() {
        let presets = builtin_presets();
        assert_eq!(presets.len(), 3);
        for (i, a) in presets.iter().enumerate() {
            assert!(presets[i + 1..].iter().all(|b| b.id != a.id));
        }
    }

    #[test]
    fn test_find_preset() {
        assert!(find_preset("loft").is_some());
        assert!(find_preset("gothic").is_none());
    }

    #[test]
    fn test_apply_keeps_user_values() {
        let preset = find_preset("classic").unwrap();
        let user = WindowSpec {
            w: raw(90.0),
            ..Default::default()
        };
        let spec = preset.apply(&user);
        assert_eq!(spec.w, raw(90.0));
        assert_eq!(spec.h, raw(180.0));
        assert_eq!(spec.lower_cornice.enabled, Some(true));
    }
}
