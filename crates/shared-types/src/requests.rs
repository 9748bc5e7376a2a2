use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Request DTO for saving the product edit form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UpdateProductRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Product name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Price must be non-negative"))
    )]
    pub price: f64,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Category is required"))
    )]
    pub category: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0, message = "Stock must be non-negative"))
    )]
    pub stock: i32,
    pub description: String,
}

/// Request DTO for updating the signed-in admin's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UpdateProfileRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Full name is required"))
    )]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Request DTO for changing the signed-in admin's password.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ChangePasswordRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Current password is required"))
    )]
    pub current_password: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub new_password: String,
}

/// Request DTO for saving the platform settings tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UpdatePlatformSettingsRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Site name is required"))
    )]
    pub site_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid support email is required"))
    )]
    pub support_email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Currency is required"))
    )]
    pub currency: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Timezone is required"))
    )]
    pub timezone: String,
    pub maintenance_mode: bool,
}

#[cfg(all(test, feature = "validation"))]
mod tests {
    use super::*;

    #[test]
    fn product_update_rejects_negative_price() {
        let req = UpdateProductRequest {
            name: "Premium Ankara Dress".into(),
            price: -5.0,
            category: "Clothing".into(),
            stock: 45,
            description: String::new(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn product_update_accepts_valid_form() {
        let req = UpdateProductRequest {
            name: "Premium Ankara Dress".into(),
            price: 15_000.0,
            category: "Clothing".into(),
            stock: 45,
            description: "Handmade ankara dress".into(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn password_change_requires_eight_characters() {
        let req = ChangePasswordRequest {
            current_password: "old-password".into(),
            new_password: "short".into(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("new_password"));
    }

    #[test]
    fn platform_settings_require_valid_support_email() {
        let req = UpdatePlatformSettingsRequest {
            site_name: "Jos Vendors Hub".into(),
            support_email: "not-an-email".into(),
            currency: "NGN".into(),
            timezone: "Africa/Lagos".into(),
            maintenance_mode: false,
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("support_email"));
    }
}
