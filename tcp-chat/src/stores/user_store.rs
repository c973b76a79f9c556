use crate::models::user::{User, UserId};
use std::collections::HashMap;

/// Registered accounts, keyed by id with a secondary index on the display
/// name.
#[derive(Debug, Default)]
pub struct UserStore {
    users: HashMap<UserId, User>,
    ids_by_name: HashMap<String, UserId>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the name is already registered.
    pub fn add(&mut self, user: User) -> bool {
        if self.ids_by_name.contains_key(user.name()) || self.users.contains_key(&user.id) {
            return false;
        }

        self.ids_by_name
            .insert(user.name().to_string(), user.id.clone());
        self.users.insert(user.id.clone(), user);
        true
    }

    pub fn find_by_name(&self, name: &str) -> Option<&User> {
        self.ids_by_name
            .get(name)
            .and_then(|id| self.users.get(id))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.get_mut(id)
    }

    pub fn get_all(&self) -> Vec<&User> {
        self.users.values().collect()
    }

    pub fn delete(&mut self, name: &str) -> Option<User> {
        let id = self.ids_by_name.remove(name)?;
        self.users.remove(&id)
    }

    /// Changes the display name of a user. Fails if the user does not exist
    /// or the name belongs to another account; renaming to the current name
    /// succeeds.
    pub fn rename(&mut self, id: &str, new_name: &str) -> bool {
        if let Some(owner) = self.ids_by_name.get(new_name) {
            return owner == id;
        }

        let Some(user) = self.users.get_mut(id) else {
            return false;
        };

        self.ids_by_name.remove(user.name());
        self.ids_by_name.insert(new_name.to_string(), user.id.clone());
        user.set_name(new_name);
        true
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User::new(name, "1234").unwrap()
    }

    #[test]
    fn add_rejects_duplicate_name() {
        let mut store = UserStore::new();

        assert!(store.add(user("max")));
        assert!(!store.add(user("max")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn users_are_found_by_name_and_id() {
        let mut store = UserStore::new();
        let max = user("max");
        let id = max.id.clone();
        store.add(max);

        assert_eq!(store.find_by_name("max").map(|user| user.id.clone()), Some(id.clone()));
        assert_eq!(store.find_by_id(&id).map(User::name), Some("max"));
        assert!(store.find_by_name("maria").is_none());
    }

    #[test]
    fn rename_moves_name_index() {
        let mut store = UserStore::new();
        let max = user("max");
        let id = max.id.clone();
        store.add(max);

        assert!(store.rename(&id, "maxine"));
        assert!(store.find_by_name("max").is_none());
        assert_eq!(store.find_by_name("maxine").map(|user| user.id.clone()), Some(id.clone()));
        assert_eq!(store.find_by_id(&id).map(User::name), Some("maxine"));

        // The old name is free again.
        assert!(store.add(user("max")));
    }

    #[test]
    fn rename_rejects_name_of_other_user() {
        let mut store = UserStore::new();
        let max = user("max");
        let id = max.id.clone();
        store.add(max);
        store.add(user("mo"));

        assert!(!store.rename(&id, "mo"));
        assert!(store.rename(&id, "max"));
        assert_eq!(store.find_by_id(&id).map(User::name), Some("max"));
    }

    #[test]
    fn rename_of_unknown_user_fails() {
        let mut store = UserStore::new();
        assert!(!store.rename("missing", "max"));
        assert!(store.find_by_name("max").is_none());
    }

    #[test]
    fn delete_removes_both_indexes() {
        let mut store = UserStore::new();
        let max = user("max");
        let id = max.id.clone();
        store.add(max);

        assert!(store.delete("max").is_some());
        assert!(store.find_by_id(&id).is_none());
        assert!(store.delete("max").is_none());
        assert!(store.get_all().is_empty());
    }
}
