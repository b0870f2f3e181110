//! Drives `App` against the live mock server, the way the binary does.

use students_cli::{App, Status, StudentForm};
use students_core::{Students, StudentsClient, UreqTransport};

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}{}", mock_server::RESOURCE_PATH)
}

#[test]
fn create_update_delete_session() {
    let base_url = start_server();
    let mut app = App::new(Students::new(
        StudentsClient::new(&base_url),
        UreqTransport::new(),
    ));

    app.load_all();
    assert!(app.view().students.is_empty());

    app.create(&StudentForm {
        id: String::new(),
        name: "Ann".to_string(),
        age: String::new(),
        email: "a@x.com".to_string(),
    });
    assert_eq!(app.view().status, Status::Success("Student created successfully.".to_string()));
    assert_eq!(app.view().students.len(), 1);
    let id = app.view().students[0].id;
    assert_eq!(app.view().students[0].age, 0);

    app.update(&StudentForm {
        id: id.to_string(),
        name: "Ann Lee".to_string(),
        age: "21".to_string(),
        email: "ann@x.com".to_string(),
    });
    assert_eq!(app.view().status.message(), Some(format!("Student {id} updated successfully.").as_str()));
    assert_eq!(app.view().students[0].name, "Ann Lee");

    app.get_by_id(&id.to_string());
    assert_eq!(app.view().students[0].age, 21);

    app.delete(&id.to_string());
    assert!(app.view().students.is_empty());

    app.get_by_id(&id.to_string());
    assert_eq!(app.view().status.error(), Some("Request failed (404)"));
}
