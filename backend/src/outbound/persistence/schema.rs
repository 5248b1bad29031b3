//! Diesel table definitions.
//!
//! Must stay in step with the SQL under `backend/migrations`.

diesel::table! {
    /// Stored contacts. `created_at` and `updated_at` are maintained by the
    /// database and never read by the application.
    contacts (id) {
        id -> Int4,
        name -> Text,
        phone -> Text,
        email -> Text,
        contact_type -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
