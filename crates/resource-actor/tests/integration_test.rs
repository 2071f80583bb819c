use async_trait::async_trait;
use resource_actor::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Station {
    id: u32,
    name: String,
    open: bool,
}

#[derive(Debug)]
struct StationCreate {
    name: String,
}

#[derive(Debug)]
struct StationUpdate {
    name: Option<String>,
}

#[derive(Debug)]
enum StationAction {
    Open,
}

#[derive(Debug, thiserror::Error)]
enum StationError {
    #[error("station name cannot be empty")]
    EmptyName,
}

#[async_trait]
impl ActorEntity for Station {
    type Id = u32;
    type Create = StationCreate;
    type Update = StationUpdate;
    type Action = StationAction;
    type ActionResult = bool;
    type Context = ();
    type Error = StationError;

    fn from_create_params(id: u32, params: StationCreate) -> Result<Self, Self::Error> {
        if params.name.is_empty() {
            return Err(StationError::EmptyName);
        }
        Ok(Self {
            id,
            name: params.name,
            open: false,
        })
    }

    fn id(&self) -> &u32 {
        &self.id
    }

    async fn on_update(
        &mut self,
        update: StationUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            if name.is_empty() {
                return Err(StationError::EmptyName);
            }
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: StationAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            StationAction::Open => {
                let changed = !self.open;
                self.open = true;
                Ok(changed)
            }
        }
    }
}

fn station(id: u32, name: &str) -> Station {
    Station {
        id,
        name: name.to_string(),
        open: false,
    }
}

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Station>::new(10);
    let handle = tokio::spawn(actor.run(()));

    let id: u32 = client
        .create(StationCreate {
            name: "Cuarto frío".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    assert!(client.perform_action(id, StationAction::Open).await.unwrap());
    assert!(!client.perform_action(id, StationAction::Open).await.unwrap());

    let updated = client
        .update(
            id,
            StationUpdate {
                name: Some("Partida caliente".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Partida caliente");
    assert!(updated.open);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_update_leaves_entity_untouched() {
    let (actor, client) = ResourceActor::<Station>::new(10);
    tokio::spawn(actor.run(()));

    let id = client
        .create(StationCreate {
            name: "Pastelería".into(),
        })
        .await
        .unwrap();

    let err = client
        .update(
            id,
            StationUpdate {
                name: Some(String::new()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err.into_entity::<StationError>(),
        Ok(StationError::EmptyName)
    ));

    let stored: Station = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Pastelería");
}

#[tokio::test]
async fn test_missing_entity_reports_not_found() {
    let (actor, client) = ResourceActor::<Station>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.perform_action(4, StationAction::Open).await.unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(id) if id == "4"));
}

#[tokio::test]
async fn test_restore_replaces_store_and_continues_ids() {
    let (actor, client) = ResourceActor::<Station>::new(10);
    tokio::spawn(actor.run(()));

    client
        .create(StationCreate {
            name: "Plonge".into(),
        })
        .await
        .unwrap();

    let restored = client
        .restore(vec![station(7, "Garde manger"), station(3, "Pase")])
        .await
        .unwrap();
    assert_eq!(restored, 2);

    let listed: Vec<Station> = client.list().await.unwrap();
    let ids: Vec<u32> = listed.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 7]);

    let next = client
        .create(StationCreate {
            name: "Cuarto frío".into(),
        })
        .await
        .unwrap();
    assert_eq!(next, 8);
}

#[tokio::test]
async fn test_restore_with_highest_id_is_rejected_and_store_kept() {
    let (actor, client) = ResourceActor::<Station>::new(10);
    tokio::spawn(actor.run(()));

    client.restore(vec![station(2, "Pase")]).await.unwrap();

    let err = client
        .restore(vec![station(u32::MAX, "Cuarto frío"), station(5, "Plonge")])
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::IdsExhausted));

    let listed: Vec<Station> = client.list().await.unwrap();
    assert_eq!(listed, vec![station(2, "Pase")]);

    let next = client
        .create(StationCreate {
            name: "Garde manger".into(),
        })
        .await
        .unwrap();
    assert_eq!(next, 3);
}

#[tokio::test]
async fn test_create_after_last_id_is_rejected() {
    let (actor, client) = ResourceActor::<Station>::new(10);
    tokio::spawn(actor.run(()));

    client
        .restore(vec![station(u32::MAX - 1, "Pase")])
        .await
        .unwrap();

    let err = client
        .create(StationCreate {
            name: "Plonge".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::IdsExhausted));
    assert_eq!(client.list().await.unwrap().len(), 1);
}
