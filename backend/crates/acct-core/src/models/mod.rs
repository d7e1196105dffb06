pub mod city;
pub mod profile;
pub mod user;
