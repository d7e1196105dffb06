use crate::tests::PNG_BYTES;
use crate::{City, FormData, ImageKind, Profile, ProfileForm, ProfileLimits, UploadedFile};

use googletest::prelude::*;
use uuid::Uuid;

fn stored_profile() -> Profile {
    let mut profile = Profile::new(Uuid::new_v4());
    profile.city = Some(City::Cairo);
    profile.phone_number = "+20 100 123 4567".into();
    profile.image = Some("profile_pics/old.png".into());
    profile
}

fn upload(bytes: &[u8]) -> UploadedFile {
    UploadedFile::new("avatar.png", bytes.to_vec())
}

#[test]
fn given_profile_when_from_profile_then_prepopulated() {
    let form = ProfileForm::from_profile(&stored_profile());

    assert_that!(form.city.as_str(), eq("cairo"));
    assert_that!(form.phone_number.as_str(), eq("+20 100 123 4567"));
    assert_that!(form.image, some(eq("profile_pics/old.png")));
}

#[test]
fn given_valid_fields_without_file_when_clean_then_no_new_image() {
    // Given
    let data = FormData::from_pairs([("city", "london"), ("phone_number", "(020) 7946 0018")]);
    let form = ProfileForm::bind(&data, &stored_profile());

    // When
    let changes = form.clean(&ProfileLimits::default()).unwrap();

    // Then
    assert_that!(changes.city, some(eq(City::London)));
    assert_that!(changes.phone_number.as_str(), eq("(020) 7946 0018"));
    assert_that!(changes.image, none());
}

#[test]
fn given_blank_city_when_clean_then_city_cleared() {
    let data = FormData::from_pairs([("city", ""), ("phone_number", "")]);

    let changes = ProfileForm::bind(&data, &stored_profile())
        .clean(&ProfileLimits::default())
        .unwrap();

    assert_that!(changes.city, none());
}

#[test]
fn given_unknown_city_when_clean_then_choice_error() {
    let data = FormData::from_pairs([("city", "atlantis")]);

    let errors = ProfileForm::bind(&data, &stored_profile())
        .clean(&ProfileLimits::default())
        .unwrap_err();

    assert_that!(
        errors.field("city")[0].as_str(),
        starts_with("Select a valid choice.")
    );
}

#[test]
fn given_invalid_phone_when_clean_then_phone_error_only() {
    let data = FormData::from_pairs([("city", "paris"), ("phone_number", "call me maybe")]);

    let errors = ProfileForm::bind(&data, &stored_profile())
        .clean(&ProfileLimits::default())
        .unwrap_err();

    assert_that!(errors.has("phone_number"), eq(true));
    assert_that!(errors.has("city"), eq(false));
}

#[test]
fn given_png_upload_when_clean_then_image_accepted() {
    let mut data = FormData::from_pairs([("city", "")]);
    data.insert_file("image", upload(PNG_BYTES));

    let changes = ProfileForm::bind(&data, &stored_profile())
        .clean(&ProfileLimits::default())
        .unwrap();

    let image = changes.image.unwrap();
    assert_that!(image.kind, eq(ImageKind::Png));
    assert_that!(image.bytes.as_slice(), eq(PNG_BYTES));
}

#[test]
fn given_non_image_upload_when_clean_then_image_error() {
    let mut data = FormData::new();
    data.insert_file("image", upload(b"#!/bin/sh\necho hi\n"));

    let errors = ProfileForm::bind(&data, &stored_profile())
        .clean(&ProfileLimits::default())
        .unwrap_err();

    assert_that!(
        errors.field("image")[0].as_str(),
        starts_with("Upload a valid image.")
    );
}

#[test]
fn given_png_header_with_garbage_body_when_clean_then_image_error() {
    // Given
    let mut corrupt = PNG_BYTES[..16].to_vec();
    corrupt.extend_from_slice(&[0xAB; 64]);
    let mut data = FormData::new();
    data.insert_file("image", upload(&corrupt));

    // When
    let errors = ProfileForm::bind(&data, &stored_profile())
        .clean(&ProfileLimits::default())
        .unwrap_err();

    // Then
    assert_that!(
        errors.field("image")[0].as_str(),
        starts_with("Upload a valid image.")
    );
}

#[test]
fn given_discarded_oversized_part_when_clean_then_too_large_error() {
    // Given
    let limits = ProfileLimits::default();
    let mut data = FormData::new();
    data.insert_file(
        "image",
        UploadedFile::oversized("huge.png", limits.max_upload_bytes + 1),
    );

    // When
    let errors = ProfileForm::bind(&data, &stored_profile())
        .clean(&limits)
        .unwrap_err();

    // Then
    assert_that!(
        errors.field("image")[0].as_str(),
        contains_substring("too large")
    );
}

#[test]
fn given_oversized_upload_when_clean_then_image_error() {
    let mut data = FormData::new();
    data.insert_file("image", upload(PNG_BYTES));
    let limits = ProfileLimits {
        max_upload_bytes: 4,
        ..ProfileLimits::default()
    };

    let errors = ProfileForm::bind(&data, &stored_profile())
        .clean(&limits)
        .unwrap_err();

    assert_that!(
        errors.field("image")[0].as_str(),
        contains_substring("too large")
    );
}

#[test]
fn given_empty_file_part_when_bound_then_treated_as_no_upload() {
    let mut data = FormData::new();
    data.insert_file(
        "image",
        UploadedFile::new(String::new(), Vec::new()),
    );

    let changes = ProfileForm::bind(&data, &stored_profile())
        .clean(&ProfileLimits::default())
        .unwrap();

    assert_that!(changes.image, none());
}
