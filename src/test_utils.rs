use crate::models::domain::ReferenceLink;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A well-formed answer carrying code, complexity and explanation.
    pub fn model_answer() -> String {
        "Here is the solution.\n\
         <code>\n\
         def reverse(head):\n    prev = None\n    while head:\n        head.next, prev, head = prev, head, head.next\n    return prev\n\
         </code>\n\
         <time_complexity>\nO(n)\n</time_complexity>\n\
         <explanation>\nWalk the list once, pointing each node back at its predecessor.\n</explanation>\n"
            .to_string()
    }

    pub fn reference_links() -> Vec<ReferenceLink> {
        vec![
            ReferenceLink::new(
                "https://www.geeksforgeeks.org/reverse-a-linked-list/",
                Some("Reverse a linked list".to_string()),
            ),
            ReferenceLink::new("https://leetcode.com/problems/reverse-linked-list/", None),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::{
        io::{Read, Write},
        net::{SocketAddr, TcpListener, TcpStream},
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc, Mutex,
        },
        thread,
    };

    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Local HTTP endpoint that answers every request with one canned
    /// response and records what it received.
    pub struct HttpStub {
        addr: SocketAddr,
        hits: Arc<AtomicUsize>,
        heads: Arc<Mutex<Vec<String>>>,
    }

    impl HttpStub {
        pub fn start(status: &str, body: &str) -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
            let addr = listener.local_addr().expect("stub address");
            let hits = Arc::new(AtomicUsize::new(0));
            let heads = Arc::new(Mutex::new(Vec::new()));
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );

            let (hit_counter, head_log) = (Arc::clone(&hits), Arc::clone(&heads));
            thread::spawn(move || {
                for stream in listener.incoming() {
                    let Ok(mut stream) = stream else { continue };
                    let head = read_request(&mut stream);
                    head_log.lock().unwrap().push(head);
                    hit_counter.fetch_add(1, Ordering::SeqCst);
                    let _ = stream.write_all(response.as_bytes());
                    let _ = stream.flush();
                }
            });

            Self { addr, hits, heads }
        }

        pub fn base_url(&self) -> String {
            format!("http://{}", self.addr)
        }

        pub fn hits(&self) -> usize {
            self.hits.load(Ordering::SeqCst)
        }

        /// Request line and headers of every request received so far.
        pub fn request_heads(&self) -> Vec<String> {
            self.heads.lock().unwrap().clone()
        }
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
            match stream.read(&mut chunk) {
                Ok(0) | Err(_) => return String::from_utf8_lossy(&buf).into_owned(),
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            match stream.read(&mut chunk) {
                Ok(0) | Err(_) => break,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
            }
        }

        head
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::{models::domain::ResponseField, services::tag_extractor::extract_all};

    #[test]
    fn test_fixture_answer_is_well_formed() {
        let response = extract_all(&model_answer(), &ResponseField::ALL);

        assert!(response.contains(ResponseField::Code));
        assert_eq!(&response[ResponseField::TimeComplexity], "O(n)");
        assert!(!response.contains(ResponseField::Flow));
    }

    #[test]
    fn test_fixture_links() {
        let links = reference_links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].title, links[1].url);
    }
}
