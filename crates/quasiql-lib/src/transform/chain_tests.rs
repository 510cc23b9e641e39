use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::{Transform, TransformChain, TransformRegistry};
use crate::Error;

fn registry() -> TransformRegistry {
    let mut registry = TransformRegistry::empty();
    registry
        .register("append-a", |_: &Path| -> Transform {
            Arc::new(|_: &Path, text: &str| format!("{text}a"))
        })
        .register("upper", |_: &Path| -> Transform {
            Arc::new(|_: &Path, text: &str| text.to_uppercase())
        })
        .register("filename", |_: &Path| -> Transform {
            Arc::new(|filename: &Path, text: &str| format!("{}:{text}", filename.display()))
        });
    registry
}

#[test]
fn identity_chain() {
    let chain = TransformChain::identity();
    assert!(chain.is_empty());
    assert_eq!(chain.apply(Path::new("a.js"), "text"), "text");
}

#[test]
fn composes_left_to_right() {
    let registry = registry();
    let base = Path::new("/base");

    let chain = TransformChain::build(&registry, base, ["append-a", "upper"]).unwrap();
    assert_eq!(chain.apply(Path::new("a.js"), "x"), "XA");

    let swapped = TransformChain::build(&registry, base, ["upper", "append-a"]).unwrap();
    assert_eq!(swapped.apply(Path::new("a.js"), "x"), "Xa");

    assert_eq!(chain.names(), ["append-a", "upper"]);
}

#[test]
fn every_transform_sees_the_filename() {
    let chain =
        TransformChain::build(&registry(), Path::new("/base"), ["filename", "filename"]).unwrap();
    assert_eq!(chain.apply(Path::new("/base/a.js"), "t"), "/base/a.js:/base/a.js:t");
}

#[test]
fn factories_run_once_per_build() {
    let seen: Arc<Mutex<Vec<PathBuf>>> = Arc::default();
    let mut registry = TransformRegistry::empty();
    let record = Arc::clone(&seen);
    registry.register("record", move |base_dir: &Path| -> Transform {
        record.lock().unwrap().push(base_dir.to_path_buf());
        Arc::new(|_: &Path, text: &str| text.to_string())
    });

    let chain = TransformChain::build(&registry, Path::new("/one"), ["record"]).unwrap();
    chain.apply(Path::new("a.js"), "a");
    chain.apply(Path::new("b.js"), "b");
    TransformChain::build(&registry, Path::new("/two"), ["record"]).unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![PathBuf::from("/one"), PathBuf::from("/two")]
    );
}

#[test]
fn unknown_name_fails_before_instantiation() {
    let calls: Arc<Mutex<usize>> = Arc::default();
    let mut registry = registry();
    let counter = Arc::clone(&calls);
    registry.register("counted", move |_: &Path| -> Transform {
        *counter.lock().unwrap() += 1;
        Arc::new(|_: &Path, text: &str| text.to_string())
    });

    let err = TransformChain::build(&registry, Path::new("/base"), ["counted", "uper"]).unwrap_err();
    let Error::TransformResolution { name, suggestion } = &err else {
        panic!("expected a resolution error, got {err:?}");
    };
    assert_eq!(name, "uper");
    assert_eq!(suggestion.as_deref(), Some("upper"));
    assert_eq!(*calls.lock().unwrap(), 0);
    insta::assert_snapshot!(err, @r#"cannot resolve transform "uper""#);
}

#[test]
fn chain_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransformChain>();
    assert_send_sync::<TransformRegistry>();

    let chain = Arc::new(TransformChain::build(&registry(), Path::new("/b"), ["upper"]).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let chain = Arc::clone(&chain);
            std::thread::spawn(move || chain.apply(Path::new("a.js"), &format!("t{i}")))
        })
        .collect();
    let outputs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outputs, vec!["T0", "T1", "T2", "T3"]);
}
