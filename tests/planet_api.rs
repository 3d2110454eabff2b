//! Public JSON contract of the planet endpoint.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use approx::assert_relative_eq;
use drifter::api::PlanetResponse;
use drifter::operations::creation::MakeIcosidodecahedron;
use drifter::operations::query::DeriveEdges;
use drifter::topology::Face;
use serde_json::Value;

fn planet_json(radius: f64) -> Value {
    serde_json::to_value(PlanetResponse::generate(radius).unwrap()).unwrap()
}

#[test]
fn response_shape() {
    let json = planet_json(1.0);
    let object = json.as_object().unwrap();
    let keys: HashSet<_> = object.keys().map(String::as_str).collect();
    assert_eq!(keys, HashSet::from(["planetId", "mesh", "metadata"]));

    let mesh = json["mesh"].as_object().unwrap();
    let keys: HashSet<_> = mesh.keys().map(String::as_str).collect();
    assert_eq!(keys, HashSet::from(["vertices", "faces", "edges"]));

    let vertex = &json["mesh"]["vertices"][0];
    for key in ["id", "x", "y", "z"] {
        assert!(vertex[key].is_number(), "vertex field {key}");
    }

    let face = &json["mesh"]["faces"][0];
    assert!(face["vertices"].is_array());
    assert!(face["type"].is_string());

    let edge = &json["mesh"]["edges"][0];
    assert_eq!(edge["vertices"].as_array().unwrap().len(), 2);
}

#[test]
fn metadata_counts_match_arrays() {
    let json = planet_json(2.5);
    let count = |key: &str| json["mesh"][key].as_array().unwrap().len() as u64;
    assert_eq!(json["metadata"]["vertexCount"], count("vertices"));
    assert_eq!(json["metadata"]["faceCount"], count("faces"));
    assert_eq!(json["metadata"]["edgeCount"], count("edges"));
    assert_eq!(json["metadata"]["genus"], 0);
}

#[test]
fn serialized_vertices_keep_their_radius() {
    let json = planet_json(2.5);
    for v in json["mesh"]["vertices"].as_array().unwrap() {
        let x = v["x"].as_f64().unwrap();
        let y = v["y"].as_f64().unwrap();
        let z = v["z"].as_f64().unwrap();
        assert_relative_eq!((x * x + y * y + z * z).sqrt(), 2.5, max_relative = 1e-9);
    }
}

#[test]
fn face_type_tags() {
    let json = planet_json(1.0);
    let faces = json["mesh"]["faces"].as_array().unwrap();
    let triangles = faces.iter().filter(|f| f["type"] == "triangle").count();
    let pentagons = faces.iter().filter(|f| f["type"] == "pentagon").count();
    assert_eq!((triangles, pentagons), (20, 12));
    for f in faces {
        let n = f["vertices"].as_array().unwrap().len();
        let expected = if n == 3 { "triangle" } else { "pentagon" };
        assert_eq!(f["type"], expected);
    }
}

#[test]
fn edges_do_not_depend_on_face_order() {
    let mesh = MakeIcosidodecahedron::new(1.0).execute().unwrap();
    let reversed: Vec<Face> = mesh
        .faces()
        .iter()
        .rev()
        .enumerate()
        .map(|(id, f)| {
            let mut cycle = f.vertices().to_vec();
            cycle.reverse();
            Face::new(id, cycle).unwrap()
        })
        .collect();

    let original: HashSet<_> = mesh.edges().iter().map(|e| e.vertices()).collect();
    let derived: HashSet<_> = DeriveEdges::new(&reversed)
        .execute()
        .iter()
        .map(|e| e.vertices())
        .collect();
    assert_eq!(original.len(), 60);
    assert_eq!(original, derived);
}
