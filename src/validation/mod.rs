// ============================================================================
// VALIDATION - Esquemas puros de validación de formularios
// ============================================================================
// Cada esquema es un conjunto de predicados sobre un input plano que devuelve
// Ok(()) o un mapa campo → mensaje localizado. Sin efectos.
// ============================================================================

pub mod errors;
pub mod shipping;
pub mod payment;
pub mod register;
pub mod password;

pub use errors::ValidationErrors;
pub use shipping::validate_shipping;
pub use payment::{validate_payment, PaymentInfoForm};
pub use register::{
    validate_profile_edit, validate_register, ProfileEditForm, RegisterForm,
};
pub use password::{validate_password_change, PasswordChangeForm};
