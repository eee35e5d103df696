//! Diesel schema for todo item persistence.

diesel::table! {
    /// Todo items, each owned by exactly one user.
    todo_items (id) {
        /// Store-generated item identifier.
        id -> Int8,
        /// Identity-provider user identifier of the owner.
        #[max_length = 450]
        owner_id -> Varchar,
        /// Item title.
        title -> Text,
        /// Optional description, at most 500 characters.
        #[max_length = 500]
        description -> Nullable<Varchar>,
        /// Calendar due date.
        due_date -> Date,
        /// Whether work on the item has started.
        in_process -> Bool,
        /// Whether the item is complete.
        is_done -> Bool,
        /// Optimistic concurrency token.
        version -> Int8,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
