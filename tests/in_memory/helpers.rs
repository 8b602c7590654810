//! Shared helpers for dispatch facade integration tests.

use freightdesk::api::DispatchApi;
use freightdesk::attachment::RawFile;
use freightdesk::attachment::adapters::memory::InMemoryFileStore;
use freightdesk::auth::{Principal, Role};
use freightdesk::task::adapters::memory::InMemoryTaskRepository;
use freightdesk::task::services::{FinalizeTaskRequest, SubmitTaskRequest};
use freightdesk::user::adapters::memory::InMemoryUserRepository;
use freightdesk::user::{User, UserId};
use mockable::DefaultClock;
use std::sync::Arc;

/// Facade type wired to in-memory adapters.
pub type TestApi = DispatchApi<
    InMemoryTaskRepository,
    InMemoryUserRepository,
    InMemoryFileStore,
    DefaultClock,
>;

/// A facade plus handles to its underlying adapters.
pub struct World {
    /// Facade under test.
    pub api: TestApi,
    /// Task store behind the facade.
    pub tasks: Arc<InMemoryTaskRepository>,
    /// User store behind the facade.
    pub users: Arc<InMemoryUserRepository>,
    /// File store behind the facade.
    pub files: Arc<InMemoryFileStore>,
}

impl World {
    /// Builds a facade over fresh in-memory adapters.
    #[must_use]
    pub fn new() -> Self {
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let files = Arc::new(InMemoryFileStore::new());
        let api = DispatchApi::new(
            Arc::clone(&tasks),
            Arc::clone(&users),
            Arc::clone(&files),
            Arc::new(DefaultClock),
        );
        Self {
            api,
            tasks,
            users,
            files,
        }
    }

    /// Seeds a user and returns a principal acting as them.
    pub fn actor(&self, name: &str, role: Role) -> Principal {
        let id = UserId::new();
        self.users
            .seed(User::new(id, name, role))
            .expect("seeding must succeed");
        Principal::new(id.to_string(), role)
    }
}

/// A five-row import covering every recognized column.
pub const IMPORT_CSV: &str = "\
MC Number,Company Name,Address,Email,Phone
MC-100,Alpha Freight,1 Pier Ave,alpha@example.com,555-0101
MC-200,Bravo Haulage,2 Pier Ave,bravo@example.com,555-0102
MC-300,Cargo Lines,3 Pier Ave,cargo@example.com,555-0103
MC-400,Delta Transport,4 Pier Ave,delta@example.com,555-0104
MC-500,Echo Carriers,5 Pier Ave,echo@example.com,555-0105
";

/// Builds a submit payload addressed to the given dispatcher principal.
#[must_use]
pub fn submit_payload(dispatcher: &Principal) -> SubmitTaskRequest {
    SubmitTaskRequest {
        driver_name: "R. Alvarez".to_owned(),
        truck_type: "Reefer".to_owned(),
        working_date: "2024-02-18".to_owned(),
        offer_rate: 2100.0,
        weight: 18_500.0,
        call_time: "06:45".to_owned(),
        comments: "Temperature-controlled".to_owned(),
        dispatcher_id: dispatcher.id().to_owned(),
    }
}

/// Builds a finalize payload with a 1500.00 invoice dated 2024-03-01.
#[must_use]
pub fn finalize_payload() -> FinalizeTaskRequest {
    FinalizeTaskRequest {
        po_number: "PO-88123".to_owned(),
        load_detail: "Produce, single stop".to_owned(),
        pickup_date: "2024-02-19".to_owned(),
        delivery_date: "2024-02-21".to_owned(),
        rate: 2100.0,
        broker_detail: "Northline Logistics".to_owned(),
        load_status: "delivered".to_owned(),
        invoice_amount: 1500.00,
        invoice_date: "2024-03-01".to_owned(),
    }
}

/// Builds `count` small allow-listed files.
#[must_use]
pub fn pdf_files(count: usize) -> Vec<RawFile> {
    (0..count)
        .map(|i| RawFile::new(format!("document-{i}.pdf"), vec![0u8; 64]))
        .collect()
}
