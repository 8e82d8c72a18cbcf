use actor_framework::mock::{create_mock_client, expect_delete, expect_list};
use actor_framework::{ActorEntity, FrameworkError, ResourceActor, ResourceClient};
use async_trait::async_trait;

// --- Test Entities ---

#[derive(Clone, Debug, PartialEq)]
struct Dish {
    id: String,
    shelf: String,
    name: String,
    price: f64,
}

#[derive(Debug)]
struct DishCreate {
    shelf: String,
    name: String,
    price: f64,
}

#[derive(Debug)]
struct DishUpdate {
    price: Option<f64>,
}

#[derive(Debug)]
enum DishAction {
    Discount(f64),
}

#[derive(Debug, thiserror::Error)]
enum DishError {
    #[error("Price must not be negative")]
    NegativePrice,
}

#[async_trait]
impl ActorEntity for Dish {
    type Id = String;
    type Create = DishCreate;
    type Update = DishUpdate;
    type Query = Option<String>;
    type Action = DishAction;
    type ActionResult = f64;
    type Context = ();
    type Error = DishError;

    fn from_create_params(id: String, params: DishCreate) -> Result<Self, Self::Error> {
        if params.price < 0.0 {
            return Err(DishError::NegativePrice);
        }
        Ok(Self {
            id,
            shelf: params.shelf,
            name: params.name,
            price: params.price,
        })
    }

    fn matches(&self, query: &Option<String>) -> bool {
        query.as_ref().map_or(true, |shelf| &self.shelf == shelf)
    }

    async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            if price < 0.0 {
                return Err(DishError::NegativePrice);
            }
            self.price = price;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: DishAction, _ctx: &()) -> Result<f64, Self::Error> {
        match action {
            DishAction::Discount(amount) => {
                self.price = (self.price - amount).max(0.0);
                Ok(self.price)
            }
        }
    }
}

/// A shelf whose deletion removes its dishes through the context client.
#[derive(Clone, Debug)]
struct Shelf {
    id: String,
}

#[derive(Debug)]
struct ShelfCreate;

#[derive(Debug)]
enum ShelfAction {}

#[derive(Debug, thiserror::Error)]
#[error("Shelf error: {0}")]
struct ShelfError(String);

#[async_trait]
impl ActorEntity for Shelf {
    type Id = String;
    type Create = ShelfCreate;
    type Update = ();
    type Query = ();
    type Action = ShelfAction;
    type ActionResult = ();
    type Context = ResourceClient<Dish>;
    type Error = ShelfError;

    fn from_create_params(id: String, _: ShelfCreate) -> Result<Self, Self::Error> {
        Ok(Self { id })
    }

    async fn on_update(&mut self, _: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_delete(&self, dishes: &Self::Context) -> Result<(), Self::Error> {
        let contained = dishes
            .list(Some(self.id.clone()))
            .await
            .map_err(|e| ShelfError(e.to_string()))?;
        for dish in contained {
            dishes
                .delete(dish.id)
                .await
                .map_err(|e| ShelfError(e.to_string()))?;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _: ShelfAction, _: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn dish(shelf: &str, name: &str, price: f64) -> DishCreate {
    DishCreate {
        shelf: shelf.to_string(),
        name: name.to_string(),
        price,
    }
}

#[tokio::test]
async fn test_crud_lifecycle() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    tokio::spawn(actor.run(()));

    let id = client
        .create("tikka".to_string(), dish("bbq", "Chicken Tikka", 150.0))
        .await
        .unwrap();
    assert_eq!(id, "tikka");

    let fetched = client.get(id.clone()).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Chicken Tikka");

    let updated = client
        .update(id.clone(), DishUpdate { price: Some(180.0) })
        .await
        .unwrap();
    assert_eq!(updated.price, 180.0);

    let discounted = client
        .perform_action(id.clone(), DishAction::Discount(30.0))
        .await
        .unwrap();
    assert_eq!(discounted, 150.0);

    client.delete(id.clone()).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_rejects_existing_id() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    tokio::spawn(actor.run(()));

    client
        .create("naan".to_string(), dish("breads", "Plain Naan", 20.0))
        .await
        .unwrap();
    let second = client
        .create("naan".to_string(), dish("breads", "Other Naan", 25.0))
        .await;
    assert!(matches!(second, Err(FrameworkError::AlreadyExists(id)) if id == "naan"));

    let stored = client.get("naan".to_string()).await.unwrap().unwrap();
    assert_eq!(stored.name, "Plain Naan");
}

#[tokio::test]
async fn test_entity_errors_leave_store_untouched() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    tokio::spawn(actor.run(()));

    let created = client
        .create("bad".to_string(), dish("bbq", "Broken", -1.0))
        .await;
    assert!(matches!(created, Err(FrameworkError::EntityError(_))));
    assert!(client.get("bad".to_string()).await.unwrap().is_none());

    client
        .create("kheer".to_string(), dish("sweets", "Kheer", 120.0))
        .await
        .unwrap();
    let updated = client
        .update("kheer".to_string(), DishUpdate { price: Some(-5.0) })
        .await;
    assert!(matches!(updated, Err(FrameworkError::EntityError(_))));
    let stored = client.get("kheer".to_string()).await.unwrap().unwrap();
    assert_eq!(stored.price, 120.0);
}

#[tokio::test]
async fn test_missing_ids_report_not_found() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    tokio::spawn(actor.run(()));

    let updated = client
        .update("ghost".to_string(), DishUpdate { price: None })
        .await;
    assert!(matches!(updated, Err(FrameworkError::NotFound(_))));
    let deleted = client.delete("ghost".to_string()).await;
    assert!(matches!(deleted, Err(FrameworkError::NotFound(_))));
    let acted = client
        .perform_action("ghost".to_string(), DishAction::Discount(1.0))
        .await;
    assert!(matches!(acted, Err(FrameworkError::NotFound(_))));
}

#[tokio::test]
async fn test_list_filters_and_keeps_insertion_order() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    tokio::spawn(actor.run(()));

    for (id, shelf) in [("c", "bbq"), ("a", "rice"), ("b", "bbq")] {
        client
            .create(id.to_string(), dish(shelf, id, 10.0))
            .await
            .unwrap();
    }

    let all: Vec<String> = client
        .list(None)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(all, vec!["c", "a", "b"]);

    let bbq: Vec<String> = client
        .list(Some("bbq".to_string()))
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(bbq, vec!["c", "b"]);

    client.delete("c".to_string()).await.unwrap();
    client
        .create("c".to_string(), dish("bbq", "again", 10.0))
        .await
        .unwrap();
    let reordered: Vec<String> = client
        .list(None)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(reordered, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_with_entries_seeds_the_store() {
    let seed = vec![
        (
            "halwa".to_string(),
            Dish {
                id: "halwa".to_string(),
                shelf: "sweets".to_string(),
                name: "Halwa".to_string(),
                price: 80.0,
            },
        ),
        (
            "kheer".to_string(),
            Dish {
                id: "kheer".to_string(),
                shelf: "sweets".to_string(),
                name: "Kheer".to_string(),
                price: 120.0,
            },
        ),
    ];
    let (actor, client) = ResourceActor::<Dish>::with_entries(10, seed);
    tokio::spawn(actor.run(()));

    let names: Vec<String> = client
        .list(None)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, vec!["Halwa", "Kheer"]);
}

#[tokio::test]
async fn test_on_delete_cascades_through_context() {
    let (dish_actor, dishes) = ResourceActor::<Dish>::new(10);
    let (shelf_actor, shelves) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(dish_actor.run(()));
    tokio::spawn(shelf_actor.run(dishes.clone()));

    shelves
        .create("bbq".to_string(), ShelfCreate)
        .await
        .unwrap();
    dishes
        .create("tikka".to_string(), dish("bbq", "Chicken Tikka", 150.0))
        .await
        .unwrap();
    dishes
        .create("ribs".to_string(), dish("bbq", "Beef Ribs", 400.0))
        .await
        .unwrap();
    dishes
        .create("pulao".to_string(), dish("rice", "Chicken Pulao", 250.0))
        .await
        .unwrap();

    shelves.delete("bbq".to_string()).await.unwrap();

    let left: Vec<String> = dishes
        .list(None)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(left, vec!["pulao"]);
}

#[tokio::test]
async fn test_cascade_failure_keeps_the_parent() {
    let (dishes, mut requests) = create_mock_client::<Dish>(10);
    let (shelf_actor, shelves) = ResourceActor::<Shelf>::new(10);
    tokio::spawn(shelf_actor.run(dishes));

    shelves
        .create("bbq".to_string(), ShelfCreate)
        .await
        .unwrap();

    let delete = tokio::spawn({
        let shelves = shelves.clone();
        async move { shelves.delete("bbq".to_string()).await }
    });

    let (query, respond) = expect_list(&mut requests).await.unwrap();
    assert_eq!(query.as_deref(), Some("bbq"));
    respond
        .send(Ok(vec![Dish {
            id: "tikka".to_string(),
            shelf: "bbq".to_string(),
            name: "Chicken Tikka".to_string(),
            price: 150.0,
        }]))
        .unwrap();

    let (id, respond) = expect_delete(&mut requests).await.unwrap();
    assert_eq!(id, "tikka");
    respond.send(Err(FrameworkError::ActorClosed)).unwrap();

    let result = delete.await.unwrap();
    assert!(matches!(result, Err(FrameworkError::EntityError(_))));
    assert!(shelves.get("bbq".to_string()).await.unwrap().is_some());
}

#[tokio::test]
async fn test_closed_actor_reports_transport_error() {
    let (actor, client) = ResourceActor::<Dish>::new(10);
    drop(actor);

    let result = client.list(None).await;
    let err = result.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
    assert!(err.is_transport());
}
