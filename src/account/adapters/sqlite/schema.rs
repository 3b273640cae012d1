//! Diesel schema for account persistence.

diesel::table! {
    /// Registered accounts.
    accounts (id) {
        /// Account identifier (UUID text).
        id -> Text,
        /// Unique login name.
        username -> Text,
        /// Encoded PBKDF2 digest.
        password_hash -> Text,
        /// Optional profile photo reference.
        profile_photo -> Nullable<Text>,
        /// Incremented on logout to revoke outstanding sessions.
        session_epoch -> BigInt,
        /// Registration timestamp (UTC).
        created_at -> Timestamp,
    }
}
