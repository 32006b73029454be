use crate::helpers::spawn_app;

#[actix_rt::test]
async fn offered_services_are_listed_in_declaration_order() {
    let app = spawn_app().await;

    let response = reqwest::Client::new()
        .get(format!("{}/api/services", &app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());
    let services: Vec<String> = response.json().await.unwrap();
    assert_eq!(
        services,
        vec![
            "Python Development",
            "Web Development",
            "UI/UX Design",
            "WordPress Websites",
            "Landing Pages",
            "Portfolio Websites",
            "Resume Creation",
            "MS Office Services",
            "Media Editing",
        ]
    );
}
