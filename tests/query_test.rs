use actor_framework::mock::MockClient;
use actor_framework::FrameworkError;
use restaurant_site::account_actor::Account;
use restaurant_site::backend::Backend;
use restaurant_site::clients::{
    AccountClient, CategoryClient, GalleryClient, MenuItemClient, ProfileClient,
};
use restaurant_site::model::{
    GalleryImage, MenuCategory, MenuItem, Principal, RestaurantProfile, UserRole,
};
use restaurant_site::query::{ClientError, QueryClient, QueryKey, QueryStatus};

/// One scripted client per resource.
struct Mocks {
    profile: MockClient<RestaurantProfile>,
    categories: MockClient<MenuCategory>,
    items: MockClient<MenuItem>,
    gallery: MockClient<GalleryImage>,
    accounts: MockClient<Account>,
}

impl Mocks {
    fn new() -> Self {
        Self {
            profile: MockClient::new(),
            categories: MockClient::new(),
            items: MockClient::new(),
            gallery: MockClient::new(),
            accounts: MockClient::new(),
        }
    }

    fn backend(&self) -> Backend {
        Backend::new(
            ProfileClient::new(self.profile.client()),
            CategoryClient::new(self.categories.client()),
            MenuItemClient::new(self.items.client()),
            GalleryClient::new(self.gallery.client()),
            AccountClient::new(self.accounts.client()),
        )
    }

    fn verify(&self) {
        self.profile.verify();
        self.categories.verify();
        self.items.verify();
        self.gallery.verify();
        self.accounts.verify();
    }
}

#[tokio::test]
async fn test_reads_are_disabled_until_attached() {
    let mut client = QueryClient::new(3);
    assert_eq!(client.menu_categories().await, QueryStatus::Disabled);
    assert_eq!(client.peek(QueryKey::GalleryImages), QueryStatus::Disabled);
    assert_eq!(
        client.add_category(MenuCategory::new("g", "Grill")).await,
        Err(ClientError::ActorNotReady)
    );
}

#[tokio::test]
async fn test_caller_profile_makes_one_attempt_per_read() {
    let mut mocks = Mocks::new();
    mocks.accounts.expect_get().return_err(FrameworkError::ActorClosed);
    mocks.accounts.expect_get().return_ok(None);

    let mut client = QueryClient::new(3);
    client.attach(mocks.backend());
    client.sign_in(Principal::new("bbbbb-bb"));

    assert!(matches!(client.caller_profile().await, QueryStatus::Failed(_)));
    assert_eq!(mocks.accounts.remaining(), 1);
    assert!(matches!(client.peek(QueryKey::CallerProfile), QueryStatus::Failed(_)));

    assert_eq!(client.caller_profile().await, QueryStatus::Ready(None));
    mocks.verify();
}

#[tokio::test]
async fn test_failed_read_is_fetched_again() {
    let mut mocks = Mocks::new();
    mocks.categories.expect_list().return_err(FrameworkError::ActorClosed);
    mocks
        .categories
        .expect_list()
        .return_ok(vec![MenuCategory::new("g", "Grill")]);

    let mut client = QueryClient::new(0);
    client.attach(mocks.backend());

    assert!(matches!(client.menu_categories().await, QueryStatus::Failed(_)));
    let recovered = vec![MenuCategory::new("g", "Grill")];
    assert_eq!(client.menu_categories().await, QueryStatus::Ready(recovered.clone()));
    // Successful results are served from the cache.
    assert_eq!(client.menu_categories().await, QueryStatus::Ready(recovered));
    mocks.verify();
}

#[tokio::test]
async fn test_other_reads_retry_before_failing() {
    let mut mocks = Mocks::new();
    mocks.accounts.expect_get().return_err(FrameworkError::ActorClosed);
    mocks.accounts.expect_get().return_err(FrameworkError::ActorDropped);
    mocks.accounts.expect_get().return_ok(None);

    let mut client = QueryClient::new(3);
    client.attach(mocks.backend());
    client.sign_in(Principal::new("bbbbb-bb"));

    assert_eq!(client.caller_role().await, QueryStatus::Ready(UserRole::User));
    mocks.verify();

    for _ in 0..4 {
        mocks.gallery.expect_list().return_err(FrameworkError::ActorClosed);
    }
    assert!(matches!(client.gallery_images().await, QueryStatus::Failed(_)));
    mocks.verify();
}

#[tokio::test]
async fn test_items_wait_for_categories() {
    let mut mocks = Mocks::new();
    mocks.categories.expect_list().return_ok(Vec::new());

    let mut client = QueryClient::new(0);
    client.attach(mocks.backend());

    assert_eq!(client.peek(QueryKey::MenuItems), QueryStatus::Pending);
    assert_eq!(client.menu_items().await, QueryStatus::Disabled);
    assert_eq!(client.peek(QueryKey::MenuItems), QueryStatus::Disabled);
    mocks.verify();
}

#[tokio::test]
async fn test_items_are_fetched_per_category() {
    let mut mocks = Mocks::new();
    mocks.categories.expect_list().return_ok(vec![
        MenuCategory::new("6", "B.B.Q"),
        MenuCategory::new("12", "SWEETS"),
    ]);
    mocks
        .items
        .expect_list()
        .return_ok(vec![MenuItem::new("12", "6", "Chicken Tikka", "", 150.0)]);
    mocks
        .items
        .expect_list()
        .return_ok(vec![MenuItem::new("37", "12", "Kheer", "Rice pudding", 120.0)]);

    let mut client = QueryClient::new(0);
    client.attach(mocks.backend());

    let items = client.menu_items().await;
    let names: Vec<&str> = items
        .ready()
        .unwrap()
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(names, vec!["Chicken Tikka", "Kheer"]);
    mocks.verify();
}

#[tokio::test]
async fn test_failed_mutation_keeps_cache() {
    let mut mocks = Mocks::new();
    mocks.gallery.expect_list().return_ok(Vec::new());
    // Admin check passes, the store then fails.
    mocks.accounts.expect_get().return_ok(Some(Account {
        principal: Principal::new("aaaaa-aa"),
        role: Some(UserRole::Admin),
        profile: None,
    }));
    mocks.gallery.expect_create().return_err(FrameworkError::ActorClosed);

    let mut client = QueryClient::new(0);
    client.attach(mocks.backend());
    client.sign_in(Principal::new("aaaaa-aa"));

    assert_eq!(client.gallery_images().await, QueryStatus::Ready(Vec::new()));
    let result = client
        .add_image(GalleryImage::new("g1", "karahi.png", "Karahi"))
        .await;
    assert!(matches!(result, Err(ClientError::Remote(_))));
    assert!(client.cache().contains(QueryKey::GalleryImages));
    mocks.verify();
}
