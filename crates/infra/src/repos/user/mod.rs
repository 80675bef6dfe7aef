mod inmemory;
mod sqlite;

use registro_domain::{User, UserId};
pub use inmemory::InMemoryUserRepo;
pub use sqlite::SqliteUserRepo;

use super::shared::DeleteResult;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    /// Assigns a fresh id when the given one is unassigned. A colliding id
    /// replaces the existing row entirely.
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn find_all(&self) -> anyhow::Result<Vec<User>>;
    /// The returned count tells the caller whether the row existed.
    async fn delete_by_id(&self, user_id: UserId) -> anyhow::Result<DeleteResult>;
    /// Removes the row matching `user` in every field, if there is one.
    async fn delete(&self, user: &User) -> anyhow::Result<()>;
    /// Overwrites all fields of the row sharing `user`'s id, if there is one.
    async fn save(&self, user: &User) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{setup_context, Repos};

    async fn test_repos() -> Vec<Repos> {
        vec![Repos::create_inmemory(), setup_context().await.repos]
    }

    fn user(id: i64, nombre: &str, apellido: &str, edad: i32) -> User {
        User {
            id: UserId::new(id),
            nombre: nombre.into(),
            apellido: apellido.into(),
            edad,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_id() {
        for repos in test_repos().await {
            let bob = User::new("Bob".into(), "Ruiz".into(), 40);
            repos.users.insert(&bob).await.expect("To insert user");

            let users = repos.users.find_all().await.expect("To list users");
            assert_eq!(users.len(), 1);
            assert!(users[0].id.is_assigned());
            assert_eq!(users[0].nombre, "Bob");
            assert_eq!(users[0].apellido, "Ruiz");
            assert_eq!(users[0].edad, 40);
        }
    }

    #[tokio::test]
    async fn test_insert_keeps_explicit_id() {
        for repos in test_repos().await {
            repos
                .users
                .insert(&user(7, "Ana", "Li", 30))
                .await
                .expect("To insert user");

            let users = repos.users.find_all().await.expect("To list users");
            assert_eq!(users.len(), 1);
            assert_eq!(users[0].id, UserId::new(7));
        }
    }

    #[tokio::test]
    async fn test_insert_replaces_row_on_id_conflict() {
        for repos in test_repos().await {
            repos
                .users
                .insert(&user(1, "Ana", "Li", 30))
                .await
                .expect("To insert user");
            repos
                .users
                .insert(&user(1, "Maria", "Ruiz", 22))
                .await
                .expect("To insert user");

            let users = repos.users.find_all().await.expect("To list users");
            assert_eq!(users.len(), 1);
            assert_eq!(users[0], user(1, "Maria", "Ruiz", 22));
        }
    }

    #[tokio::test]
    async fn test_find_all_on_empty_store() {
        for repos in test_repos().await {
            let users = repos.users.find_all().await.expect("To list users");
            assert!(users.is_empty());
        }
    }

    #[tokio::test]
    async fn test_delete_by_id_reports_missing_row() {
        for repos in test_repos().await {
            repos
                .users
                .insert(&user(1, "Ana", "Li", 30))
                .await
                .expect("To insert user");

            let res = repos
                .users
                .delete_by_id(UserId::new(99))
                .await
                .expect("To delete by id");
            assert_eq!(res.deleted_count, 0);
            assert_eq!(repos.users.find_all().await.unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_delete_by_id_removes_row() {
        for repos in test_repos().await {
            repos
                .users
                .insert(&user(1, "Ana", "Li", 30))
                .await
                .expect("To insert user");

            let res = repos
                .users
                .delete_by_id(UserId::new(1))
                .await
                .expect("To delete by id");
            assert_eq!(res.deleted_count, 1);
            assert!(repos.users.find_all().await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_delete_requires_full_value_match() {
        for repos in test_repos().await {
            let ana = user(1, "Ana", "Li", 30);
            repos.users.insert(&ana).await.expect("To insert user");

            let mut wrong_edad = ana.clone();
            wrong_edad.edad = 31;
            repos
                .users
                .delete(&wrong_edad)
                .await
                .expect("To delete user");
            assert_eq!(repos.users.find_all().await.unwrap().len(), 1);

            repos.users.delete(&ana).await.expect("To delete user");
            assert!(repos.users.find_all().await.unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_save_on_unknown_id_is_a_noop() {
        for repos in test_repos().await {
            repos
                .users
                .insert(&user(1, "Ana", "Li", 30))
                .await
                .expect("To insert user");

            repos
                .users
                .save(&user(99, "Maria", "Ruiz", 22))
                .await
                .expect("To save user");

            let users = repos.users.find_all().await.expect("To list users");
            assert_eq!(users, vec![user(1, "Ana", "Li", 30)]);
        }
    }

    #[tokio::test]
    async fn test_save_overwrites_every_field() {
        for repos in test_repos().await {
            repos
                .users
                .insert(&user(1, "Ana", "Li", 30))
                .await
                .expect("To insert user");

            repos
                .users
                .save(&user(1, "Ana", "Lopez", 31))
                .await
                .expect("To save user");

            let users = repos.users.find_all().await.expect("To list users");
            assert_eq!(users, vec![user(1, "Ana", "Lopez", 31)]);
        }
    }
}
