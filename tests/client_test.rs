use actor_framework::mock::{create_mock_client, expect_action, expect_create, MockClient};
use actor_framework::FrameworkError;
use restaurant_site::account_actor::{Account, AccountAction, AccountActionResult};
use restaurant_site::clients::{AccountClient, ProfileClient};
use restaurant_site::model::{Principal, RestaurantProfile, UserProfile, UserRole};
use restaurant_site::profile_actor::{ProfileError, PROFILE_ID};

#[tokio::test]
async fn test_save_profile_creates_missing_account() {
    let (generic_client, mut requests) = create_mock_client::<Account>(10);
    let accounts = AccountClient::new(generic_client);

    let save = tokio::spawn(async move {
        accounts
            .save_profile(
                Principal::new("bbbbb-bb"),
                UserProfile {
                    name: "Bilal".to_string(),
                },
            )
            .await
    });

    let (id, action, respond) = expect_action(&mut requests).await.unwrap();
    assert_eq!(id, Principal::new("bbbbb-bb"));
    assert!(matches!(action, AccountAction::SaveProfile(ref p) if p.name == "Bilal"));
    respond
        .send(Err(FrameworkError::NotFound(id.to_string())))
        .unwrap();

    let (id, params, respond) = expect_create(&mut requests).await.unwrap();
    assert_eq!(params.role, None);
    assert_eq!(params.profile.as_ref().map(|p| p.name.as_str()), Some("Bilal"));
    respond.send(Ok(id)).unwrap();

    assert!(save.await.unwrap().is_ok());
}

#[tokio::test]
async fn test_assign_role_retries_action_when_account_appeared() {
    let mut mock = MockClient::<Account>::new();
    mock.expect_action()
        .return_err(FrameworkError::NotFound("bbbbb-bb".to_string()));
    mock.expect_create()
        .return_err(FrameworkError::AlreadyExists("bbbbb-bb".to_string()));
    mock.expect_action()
        .return_ok(AccountActionResult::AssignRole(()));

    let accounts = AccountClient::new(mock.client());
    accounts
        .assign_role(Principal::new("bbbbb-bb"), UserRole::Admin)
        .await
        .unwrap();
    mock.verify();
}

#[tokio::test]
async fn test_replace_profile_maps_missing_record() {
    let mut mock = MockClient::<RestaurantProfile>::new();
    let profile = RestaurantProfile::seeded();
    mock.expect_update().return_ok(profile.clone());
    mock.expect_update()
        .return_err(FrameworkError::NotFound(PROFILE_ID.to_string()));

    let client = ProfileClient::new(mock.client());
    assert_eq!(client.replace_profile(profile.clone()).await.unwrap(), profile);
    assert_eq!(
        client.replace_profile(profile).await.unwrap_err(),
        ProfileError::NotFound(PROFILE_ID.to_string())
    );
    mock.verify();
}
