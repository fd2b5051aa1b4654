use shared::constants::INVALID_PRIZE_ERROR;
use shared::validation::{
    validate_hex_color, validate_label, validate_redirect_url, validate_weight,
};
use shared::wheel::{GradientDirection, Prize, PrizeFill};
use uuid::Uuid;

/// Editable form state behind the admin prize editor. Everything is a string
/// until [`PrizeDraft::to_prize`] validates and converts it.
#[derive(Debug, Clone, PartialEq)]
pub struct PrizeDraft {
    pub id: Option<String>,
    pub label: String,
    pub weight: String,
    pub use_gradient: bool,
    pub color: String,
    pub gradient_from: String,
    pub gradient_to: String,
    pub gradient_direction: GradientDirection,
    pub redirect_url: String,
    pub bonus_code: String,
    pub expires_at: String,
}

impl Default for PrizeDraft {
    fn default() -> Self {
        Self {
            id: None,
            label: String::new(),
            weight: "1".to_string(),
            use_gradient: false,
            color: "#2563eb".to_string(),
            gradient_from: "#2563eb".to_string(),
            gradient_to: "#8b5cf6".to_string(),
            gradient_direction: GradientDirection::Horizontal,
            redirect_url: String::new(),
            bonus_code: String::new(),
            expires_at: String::new(),
        }
    }
}

impl PrizeDraft {
    pub fn from_prize(prize: &Prize) -> Self {
        let mut draft = Self {
            id: Some(prize.id.clone()),
            label: prize.label.clone(),
            weight: prize.weight.to_string(),
            redirect_url: prize.redirect_url.clone().unwrap_or_default(),
            bonus_code: prize.bonus_code.clone().unwrap_or_default(),
            expires_at: prize.expires_at.clone().unwrap_or_default(),
            ..Self::default()
        };
        match &prize.fill {
            PrizeFill::Solid { color } => {
                draft.color = color.clone();
            }
            PrizeFill::Gradient { from, to, direction } => {
                draft.use_gradient = true;
                draft.gradient_from = from.clone();
                draft.gradient_to = to.clone();
                draft.gradient_direction = *direction;
            }
        }
        draft
    }

    /// Validate the form fields and build the wire-ready prize. New prizes
    /// get a client-generated id so the preview wheel can track them before
    /// the server has seen them.
    pub fn to_prize(&self) -> Result<Prize, String> {
        let weight: f64 = self
            .weight
            .trim()
            .parse()
            .map_err(|_| INVALID_PRIZE_ERROR.to_string())?;

        validate_label(&self.label).map_err(|_| INVALID_PRIZE_ERROR.to_string())?;
        validate_weight(weight).map_err(|_| INVALID_PRIZE_ERROR.to_string())?;

        let fill = if self.use_gradient {
            validate_hex_color(&self.gradient_from)
                .and(validate_hex_color(&self.gradient_to))
                .map_err(|_| INVALID_PRIZE_ERROR.to_string())?;
            PrizeFill::Gradient {
                from: self.gradient_from.clone(),
                to: self.gradient_to.clone(),
                direction: self.gradient_direction,
            }
        } else {
            validate_hex_color(&self.color).map_err(|_| INVALID_PRIZE_ERROR.to_string())?;
            PrizeFill::Solid { color: self.color.clone() }
        };

        let redirect_url = match self.redirect_url.trim() {
            "" => None,
            url => {
                validate_redirect_url(url)
                    .map_err(|_| "Redirect must be an http(s) URL".to_string())?;
                Some(url.to_string())
            }
        };

        Ok(Prize {
            id: self
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            label: self.label.trim().to_string(),
            weight,
            fill,
            redirect_url,
            bonus_code: match self.bonus_code.trim() {
                "" => None,
                code => Some(code.to_string()),
            },
            expires_at: match self.expires_at.trim() {
                "" => None,
                instant => Some(instant.to_string()),
            },
        })
    }
}

pub fn direction_label(direction: GradientDirection) -> &'static str {
    match direction {
        GradientDirection::Horizontal => "horizontal",
        GradientDirection::Vertical => "vertical",
        GradientDirection::Diagonal => "diagonal",
    }
}

pub fn direction_from_label(label: &str) -> GradientDirection {
    match label {
        "vertical" => GradientDirection::Vertical,
        "diagonal" => GradientDirection::Diagonal,
        _ => GradientDirection::Horizontal,
    }
}
