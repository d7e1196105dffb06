//! Profile editor: city, phone number and avatar image.

use crate::forms::validators;
use crate::{City, FormData, FormErrors, ImageKind, Profile, UploadedFile};

use std::str::FromStr;

use serde::Serialize;

pub const DEFAULT_MAX_PHONE_LENGTH: usize = 20;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Size limits enforced by the profile form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLimits {
    pub max_phone_length: usize,
    pub max_upload_bytes: usize,
}

impl Default for ProfileLimits {
    fn default() -> Self {
        Self {
            max_phone_length: DEFAULT_MAX_PHONE_LENGTH,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// An accepted avatar, not yet written to storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub kind: ImageKind,
    pub bytes: Vec<u8>,
}

/// Validated profile fields. `image` is `None` when no new file was sent,
/// in which case the stored image is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileChanges {
    pub city: Option<City>,
    pub phone_number: String,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileForm {
    /// Selected city key, empty for none
    pub city: String,
    pub phone_number: String,
    /// Currently stored image path, shown next to the file input
    pub image: Option<String>,
    #[serde(skip)]
    upload: Option<UploadedFile>,
    pub errors: FormErrors,
}

impl ProfileForm {
    /// Unbound form showing the stored values
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            city: profile
                .city
                .map(|city| city.as_str().to_string())
                .unwrap_or_default(),
            phone_number: profile.phone_number.clone(),
            image: profile.image.clone(),
            upload: None,
            errors: FormErrors::new(),
        }
    }

    /// Form bound to a submission for the given profile instance
    pub fn bind(data: &FormData, profile: &Profile) -> Self {
        Self {
            city: data.text("city"),
            phone_number: data.text("phone_number"),
            image: profile.image.clone(),
            upload: data.file("image").cloned(),
            errors: FormErrors::new(),
        }
    }

    pub fn clean(&self, limits: &ProfileLimits) -> Result<ProfileChanges, FormErrors> {
        let mut errors = FormErrors::new();

        let city = if self.city.is_empty() {
            None
        } else {
            match City::from_str(&self.city) {
                Ok(city) => Some(city),
                Err(_) => {
                    errors.add(
                        "city",
                        format!(
                            "Select a valid choice. {} is not one of the available choices.",
                            self.city
                        ),
                    );
                    None
                }
            }
        };

        errors.check(
            "phone_number",
            validators::phone_number(&self.phone_number, limits.max_phone_length),
        );

        let image = match &self.upload {
            Some(upload) => match Self::clean_image(upload, limits) {
                Ok(image) => Some(image),
                Err(message) => {
                    errors.add("image", message);
                    None
                }
            },
            None => None,
        };

        errors.into_result(ProfileChanges {
            city,
            phone_number: self.phone_number.clone(),
            image,
        })
    }

    pub fn with_errors(mut self, errors: FormErrors) -> Self {
        self.errors.extend(errors);
        self
    }

    fn clean_image(upload: &UploadedFile, limits: &ProfileLimits) -> Result<ImageUpload, String> {
        if upload.size == 0 {
            return Err(String::from("The submitted file is empty."));
        }
        if upload.size > limits.max_upload_bytes {
            return Err(format!(
                "The submitted file is too large (limit is {} bytes).",
                limits.max_upload_bytes
            ));
        }
        let kind = ImageKind::decode(&upload.bytes).ok_or_else(|| {
            String::from(
                "Upload a valid image. The file you uploaded was either not an image or a corrupted image.",
            )
        })?;

        Ok(ImageUpload {
            kind,
            bytes: upload.bytes.clone(),
        })
    }
}
