//! Integration tests: seed document → InMemoryEntityStore → ReportService.

use entity_store::{InMemoryEntityStore, seed};
use reports::ReportService;

const SEED: &str = r#"{
    "customers": [
        {"customer_id": 1, "first_name": "Carla", "last_name": "Dias",
         "email": "carla@loja.com.br", "country": "BR"},
        {"customer_id": 2, "first_name": "Ana", "last_name": "Souza",
         "email": "ana@gmail.com", "country": ""},
        {"customer_id": 3, "first_name": "Bruno", "last_name": "Lima",
         "email": "bruno@gmail.com", "country": "-"},
        {"customer_id": 4, "first_name": "Davi", "last_name": "Reis", "country": "BR"}
    ],
    "orders": [
        {"order_id": 1, "customer_id": 1, "order_date": "2024-01-05T10:00:00", "total_amount": 150.00},
        {"order_id": 2, "customer_id": 2, "order_date": "2024-01-20T15:30:00", "total_amount": 1200.50},
        {"order_id": 3, "customer_id": 1, "order_date": "2024-02-15T09:00:00", "total_amount": 80.00},
        {"order_id": 4, "customer_id": 3, "order_date": "2024-02-16T18:45:00", "total_amount": 45.25}
    ],
    "order_items": [
        {"order_id": 1, "product_id": 10, "quantity": 3},
        {"order_id": 1, "product_id": 11, "quantity": 1},
        {"order_id": 2, "product_id": 12, "quantity": 1},
        {"order_id": 3, "product_id": 10, "quantity": 10},
        {"order_id": 4, "product_id": 11, "quantity": 2}
    ],
    "products": [
        {"product_id": 10, "product_name": "Caneta", "price": 2.50, "category_id": 1, "supplier_id": 2},
        {"product_id": 11, "product_name": "Caderno", "price": 19.90, "category_id": 1, "supplier_id": 1},
        {"product_id": 12, "product_name": "Enciclopédia", "price": 1150.00, "category_id": 2, "supplier_id": 1}
    ],
    "categories": [
        {"category_id": 1, "category_name": "Papelaria"},
        {"category_id": 2, "category_name": "Livros"}
    ],
    "suppliers": [
        {"supplier_id": 1, "supplier_name": "Editora Sol"},
        {"supplier_id": 2, "supplier_name": "Bic"}
    ]
}"#;

fn brl(text: &str) -> String {
    text.replace(' ', "\u{a0}")
}

async fn setup() -> ReportService<InMemoryEntityStore> {
    let store = InMemoryEntityStore::new();
    seed::load_json(&store, SEED).await.unwrap();
    ReportService::new(store)
}

#[tokio::test]
async fn test_list_customers_end_to_end() {
    let service = setup().await;
    let json = serde_json::to_value(service.list_customers().await.unwrap()).unwrap();

    let names: Vec<_> = json["clientes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["NomeCompleto"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ana Souza", "Bruno Lima", "Carla Dias", "Davi Reis"]);
    assert!(json["clientes"][3]["Email"].is_null());
}

#[tokio::test]
async fn test_customers_summary_end_to_end() {
    let service = setup().await;
    let summary = service.customers_summary().await.unwrap();

    // Two placeholder countries share one bucket.
    assert_eq!(summary.countries.get("unknown"), Some(&2));
    assert_eq!(summary.countries.get("BR"), Some(&2));
    assert_eq!(summary.countries.len(), 2);

    let domains: Vec<_> = summary.email_domains.iter().collect();
    assert_eq!(domains, vec![("gmail.com", &2), ("loja.com.br", &1)]);
}

#[tokio::test]
async fn test_orders_summary_end_to_end() {
    let service = setup().await;
    let json = serde_json::to_string(&service.orders_summary().await.unwrap()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["totalPedidos"]["2024-01"], brl("R$ 1.350,50"));
    assert_eq!(value["totalPedidos"]["2024-02"], brl("R$ 125,25"));
    // January ranks above February in the serialized map.
    assert!(json.find("\"2024-01\"").unwrap() < json.find("\"2024-02\"").unwrap());

    // Ascending spend: Bruno (45,25) < Carla (230,00) < Ana (1.200,50).
    let top = value["topClientes"].as_object().unwrap();
    assert_eq!(top.len(), 3);
    assert_eq!(top["Carla Dias"], brl("R$ 230,00"));
    assert!(json.find("Bruno Lima").unwrap() < json.find("Carla Dias").unwrap());
    assert!(json.find("Carla Dias").unwrap() < json.find("Ana Souza").unwrap());

    let fortnights = &value["totalPedidosPorQuinzena"];
    assert_eq!(fortnights["2024-01"]["primeira"], brl("R$ 150,00"));
    assert_eq!(fortnights["2024-01"]["segunda"], brl("R$ 1.200,50"));
    assert_eq!(fortnights["2024-02"]["primeira"], brl("R$ 80,00"));
    assert_eq!(fortnights["2024-02"]["segunda"], brl("R$ 45,25"));
}

#[tokio::test]
async fn test_top_products_end_to_end() {
    let service = setup().await;
    let out = service.top_products().await.unwrap();

    let by_value: Vec<_> = out.by_value.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(by_value, vec!["Enciclopédia", "Caderno", "Caneta"]);

    let by_quantity: Vec<_> = out.by_quantity.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(by_quantity, vec!["Caneta", "Caderno", "Enciclopédia"]);

    let pen = &out.by_quantity[0];
    assert_eq!(pen.quantity, 13);
    assert_eq!(pen.value, brl("R$ 32,50"));
    assert_eq!(pen.category, "Papelaria");
}

#[tokio::test]
async fn test_top_products_by_category_end_to_end() {
    let service = setup().await;
    let out = service.top_products_by_category().await.unwrap();

    let by_value: Vec<_> = out.by_value.keys().collect();
    assert_eq!(by_value, vec!["Livros", "Papelaria"]);
    let by_quantity: Vec<_> = out.by_quantity.keys().collect();
    assert_eq!(by_quantity, vec!["Papelaria", "Livros"]);

    let rows = out.by_value.get("Papelaria").unwrap();
    let names: Vec<_> = rows.iter().map(|r| r.product_name.as_str()).collect();
    assert_eq!(names, vec!["Caneta", "Caderno", "Caneta", "Caderno"]);
    assert_eq!(rows[2].valor, brl("R$ 25,00"));
}

#[tokio::test]
async fn test_top_products_by_supplier_end_to_end() {
    let service = setup().await;
    let out = service.top_products_by_supplier().await.unwrap();

    let suppliers: Vec<_> = out.by_supplier.keys().collect();
    assert_eq!(suppliers, vec!["Bic", "Editora Sol"]);

    let rows = out.by_supplier.get("Editora Sol").unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].product_name, "Enciclopédia");
    assert_eq!(rows[1].category_name, "Livros");
    assert_eq!(rows[1].valor, brl("R$ 1.150,00"));
}

#[tokio::test]
async fn test_reports_are_idempotent() {
    let service = setup().await;

    macro_rules! assert_stable {
        ($call:ident) => {{
            let first = serde_json::to_string(&service.$call().await.unwrap()).unwrap();
            let second = serde_json::to_string(&service.$call().await.unwrap()).unwrap();
            assert_eq!(first, second, stringify!($call));
        }};
    }

    assert_stable!(list_customers);
    assert_stable!(customers_summary);
    assert_stable!(orders_summary);
    assert_stable!(top_products);
    assert_stable!(top_products_by_category);
    assert_stable!(top_products_by_supplier);
}

#[tokio::test]
async fn test_two_customer_example() {
    let store = InMemoryEntityStore::new();
    seed::load_json(
        &store,
        r#"{"customers": [
            {"customer_id": 1, "first_name": "Ana", "last_name": "A", "country": ""},
            {"customer_id": 2, "first_name": "Bo", "last_name": "B", "country": "BR"}
        ]}"#,
    )
    .await
    .unwrap();

    let summary = ReportService::new(store).customers_summary().await.unwrap();
    assert_eq!(summary.countries.get("unknown"), Some(&1));
    assert_eq!(summary.countries.get("BR"), Some(&1));
    assert_eq!(summary.countries.len(), 2);
}

#[tokio::test]
async fn test_empty_store_yields_empty_reports() {
    let service = ReportService::new(InMemoryEntityStore::new());

    assert!(service.list_customers().await.unwrap().customers.is_empty());
    assert!(service.orders_summary().await.unwrap().monthly_totals.is_empty());
    assert!(service.top_products().await.unwrap().by_value.is_empty());
    assert!(
        service
            .top_products_by_supplier()
            .await
            .unwrap()
            .by_supplier
            .is_empty()
    );
}

#[tokio::test]
async fn test_sub_cent_totals_are_summed_before_rounding() {
    let store = InMemoryEntityStore::new();
    seed::load_json(
        &store,
        r#"{
            "customers": [{"customer_id": 1, "first_name": "Ana", "last_name": "Souza"}],
            "orders": [
                {"order_id": 1, "customer_id": 1, "order_date": "2024-03-02", "total_amount": 1.005},
                {"order_id": 2, "customer_id": 1, "order_date": "2024-03-10", "total_amount": 0.004},
                {"order_id": 3, "customer_id": 1, "order_date": "2024-03-20", "total_amount": 0.004}
            ]
        }"#,
    )
    .await
    .unwrap();

    let json = serde_json::to_value(ReportService::new(store).orders_summary().await.unwrap())
        .unwrap();
    assert_eq!(json["totalPedidos"]["2024-03"], brl("R$ 1,01"));
    assert_eq!(json["totalPedidosPorQuinzena"]["2024-03"]["primeira"], brl("R$ 1,01"));
    assert_eq!(json["totalPedidosPorQuinzena"]["2024-03"]["segunda"], brl("R$ 0,00"));
}

#[tokio::test]
async fn test_three_decimal_prices_keep_line_value_exact() {
    let store = InMemoryEntityStore::new();
    seed::load_json(
        &store,
        r#"{
            "customers": [{"customer_id": 1, "first_name": "Ana", "last_name": "Souza"}],
            "orders": [{"order_id": 1, "customer_id": 1, "order_date": "2024-03-02", "total_amount": 0}],
            "order_items": [{"order_id": 1, "product_id": 1, "quantity": 3}],
            "products": [{"product_id": 1, "product_name": "Clipe", "price": 0.335,
                          "category_id": 1, "supplier_id": 1}],
            "categories": [{"category_id": 1, "category_name": "Papelaria"}],
            "suppliers": [{"supplier_id": 1, "supplier_name": "Acme"}]
        }"#,
    )
    .await
    .unwrap();

    // 3 × 0,335 = 1,005 rounds up; rounding the price first would give 1,02.
    let out = ReportService::new(store).top_products().await.unwrap();
    assert_eq!(out.by_value[0].value, brl("R$ 1,01"));
}

#[tokio::test]
async fn test_name_orders_follow_the_alphabet_not_code_points() {
    let store = InMemoryEntityStore::new();
    seed::load_json(
        &store,
        r#"{
            "customers": [
                {"customer_id": 1, "first_name": "Bruno", "last_name": "X"},
                {"customer_id": 2, "first_name": "ana", "last_name": "X"},
                {"customer_id": 3, "first_name": "Álvaro", "last_name": "X"},
                {"customer_id": 4, "first_name": "Zeca", "last_name": "X"}
            ],
            "orders": [{"order_id": 1, "customer_id": 1, "order_date": "2024-03-02", "total_amount": 10}],
            "order_items": [
                {"order_id": 1, "product_id": 1, "quantity": 1},
                {"order_id": 1, "product_id": 2, "quantity": 1}
            ],
            "products": [
                {"product_id": 1, "product_name": "Caneta", "price": 5, "category_id": 1, "supplier_id": 1},
                {"product_id": 2, "product_name": "Lápis", "price": 5, "category_id": 1, "supplier_id": 2}
            ],
            "categories": [{"category_id": 1, "category_name": "Papelaria"}],
            "suppliers": [
                {"supplier_id": 1, "supplier_name": "bic"},
                {"supplier_id": 2, "supplier_name": "Ática"}
            ]
        }"#,
    )
    .await
    .unwrap();
    let service = ReportService::new(store);

    let list = service.list_customers().await.unwrap();
    let names: Vec<_> = list.customers.iter().map(|c| c.full_name.as_str()).collect();
    assert_eq!(names, vec!["Álvaro X", "ana X", "Bruno X", "Zeca X"]);

    let suppliers = service.top_products_by_supplier().await.unwrap();
    let keys: Vec<_> = suppliers.by_supplier.keys().collect();
    assert_eq!(keys, vec!["Ática", "bic"]);
}
