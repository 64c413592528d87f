//! Permission resolution tests

use crate::common::{collection_with_permissions, paths_of, signed_in};
use cms_navigator::permissions::*;
use cms_navigator::{AuthState, EntityCollection, EntityReference, User};

fn segments(path: &str) -> Vec<String> {
    vec![path.to_string()]
}

#[test]
fn test_can_functions_follow_static_permissions() {
    let auth = signed_in("ana");
    let collection = EntityCollection::new("users", "Users").permissions(Permissions::read_only());
    let path = segments("users");

    assert!(can_read(&collection, &auth, &path));
    assert!(!can_create(&collection, &auth, &path));
    assert!(!can_edit(&collection, &auth, &path, None));
    assert!(!can_delete(&collection, &auth, &path, None));
}

#[test]
fn test_entity_reaches_builder() {
    let auth = signed_in("ana");
    let collection = collection_with_permissions("notes", |props| {
        let own = props
            .entity
            .zip(props.user)
            .is_some_and(|(entity, user)| entity.id == user.uid);
        Permissions {
            edit: own,
            delete: own,
            ..Permissions::read_only()
        }
    });
    let path = segments("notes");
    let mine = EntityReference::new("ana", "notes");
    let theirs = EntityReference::new("bob", "notes");

    assert!(can_edit(&collection, &auth, &path, Some(&mine)));
    assert!(!can_edit(&collection, &auth, &path, Some(&theirs)));
    assert!(!can_delete(&collection, &auth, &path, None));
}

#[test]
fn test_filter_is_idempotent() {
    let auth = signed_in("ana");
    let tree = vec![
        EntityCollection::new("products", "Products")
            .subcollection(EntityCollection::new("locales", "Locales"))
            .subcollection(
                EntityCollection::new("drafts", "Drafts").permissions(Permissions::none()),
            ),
        EntityCollection::new("secret", "Secret").permissions(Permissions::none()),
    ];

    let once = filter_allowed_collections(tree, &auth);
    assert_eq!(paths_of(&once), vec!["products"]);
    assert_eq!(paths_of(&once[0].subcollections), vec!["locales"]);

    let twice = filter_allowed_collections(once.clone(), &auth);
    assert_eq!(once, twice);
}

#[test]
fn test_builder_sees_signed_out_user() {
    let collection =
        collection_with_permissions("drafts", |props| match props.user {
            Some(_) => Permissions::all(),
            None => Permissions::none(),
        });
    let path = segments("drafts");

    assert!(!can_read(&collection, &AuthState::signed_out(), &path));
    assert!(can_read(&collection, &signed_in("ana"), &path));
}

#[test]
fn test_roles_union() {
    let user = User::new("ana")
        .role(Role::new("reader").default_permissions(Permissions::read_only()))
        .role(Role::new("writer").grant("products", Permissions {
            read: false,
            create: true,
            edit: true,
            delete: false,
        }));
    let products = EntityCollection::new("products", "Products");

    let granted = resolve_role_permissions(Some(&user), &products, &segments("products"));
    assert_eq!(
        granted,
        Permissions {
            read: true,
            create: true,
            edit: true,
            delete: false,
        }
    );
}

#[test]
fn test_admin_role_allows_everything() {
    let user = User::new("root").role(Role::admin("admin"));
    let orders = EntityCollection::new("orders", "Orders");
    assert_eq!(
        resolve_role_permissions(Some(&user), &orders, &segments("orders")),
        Permissions::all()
    );
}
