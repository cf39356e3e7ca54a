//! Normalizes the visual styling of a cdxml drawing: document level style keys,
//! per fragment rescaling to a target bond length, label restyling and the
//! implicit hydrogen display toggle.

use crate::error::{MissingAttributeError, NoAtomsError, NoCoordinatesError, UnknownStyleError};
use crate::types::{format_float, round2, Result};
use crate::xml::XmlNode;
use log::{debug, info};
use std::collections::HashMap;
use std::str::FromStr;

/// A flat set of document level drawing parameters. Values are kept in their
/// cdxml textual form, the same way they are applied to the root element.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub bond_spacing: String,
    pub bond_length: String,
    pub bold_width: String,
    pub line_width: String,
    pub margin_width: String,
    pub hash_spacing: String,
    pub caption_size: String,
    pub label_size: String,
    pub label_font: String,
    pub label_face: String,
    pub hide_implicit_hydrogens: String,
}

impl Style {
    pub fn acs_1996() -> Self {
        Self {
            bond_spacing: String::from("18"),
            bond_length: String::from("14.40"),
            bold_width: String::from("2"),
            line_width: String::from("0.60"),
            margin_width: String::from("1.60"),
            hash_spacing: String::from("2.50"),
            caption_size: String::from("10"),
            label_size: String::from("10"),
            label_font: String::from("3"),
            label_face: String::from("96"),
            hide_implicit_hydrogens: String::from("no"),
        }
    }

    pub fn wiley() -> Self {
        Self {
            bond_spacing: String::from("18"),
            bond_length: String::from("17"),
            bold_width: String::from("2.6"),
            line_width: String::from("0.75"),
            margin_width: String::from("2"),
            hash_spacing: String::from("2.6"),
            caption_size: String::from("12"),
            label_size: String::from("12"),
            label_font: String::from("3"),
            label_face: String::from("96"),
            hide_implicit_hydrogens: String::from("no"),
        }
    }

    pub fn by_name(name: &str) -> Result<Self> {
        match name {
            "ACS 1996" => Ok(Self::acs_1996()),
            "Wiley" => Ok(Self::wiley()),
            other => Err(UnknownStyleError::new(other).into()),
        }
    }

    /// Extracts the style from the root element of another document, for example
    /// a style sheet saved as cdxml.
    pub fn from_document(root: &XmlNode) -> Result<Self> {
        let read = |attr: &'static str| -> Result<String> {
            root.attribute(attr)
                .map(String::from)
                .ok_or_else(|| MissingAttributeError::new(root.name.clone(), attr).into())
        };
        Ok(Self {
            bond_spacing: read("BondSpacing")?,
            bond_length: read("BondLength")?,
            bold_width: read("BoldWidth")?,
            line_width: read("LineWidth")?,
            margin_width: read("MarginWidth")?,
            hash_spacing: read("HashSpacing")?,
            caption_size: read("CaptionSize")?,
            label_size: read("LabelSize")?,
            label_font: read("LabelFont")?,
            label_face: read("LabelFace")?,
            hide_implicit_hydrogens: read("HideImplicitHydrogens")?,
        })
    }
}

/// Attributes that stay on bond elements; everything else is stripped so the
/// document level settings take effect.
const BOND_ATTRIBUTES: &[&str] = &["id", "Z", "B", "E", "BS", "Order", "BondCircularOrdering", "Display"];

const NODE_ATTRIBUTES: &[&str] = &["id", "p", "Z", "AS", "Element", "NumHydrogens", "Geometry", "NeedsClean"];

const TEXT_ATTRIBUTES: &[&str] = &["p", "BoundingBox", "LabelJustification", "LabelAlignment"];

/// Applies a [Style] to cdxml drawings.
#[derive(Debug, Clone)]
pub struct CdxmlStyler {
    style: Style,
}

impl CdxmlStyler {
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    pub fn with_style_name(name: &str) -> Result<Self> {
        Ok(Self::new(Style::by_name(name)?))
    }

    /// Takes a cdxml string, applies the style and returns a new cdxml string.
    pub fn apply_to_string(&self, cdxml: &str) -> Result<String> {
        debug!("Applying style {:?} to a cdxml string.", self.style);
        let mut root = XmlNode::from_str(cdxml)?;
        self.apply(&mut root)?;
        debug!("Style applied. Returning result cdxml string.");
        Ok(root.to_cdxml())
    }

    /// Applies the style to a parsed document tree in place.
    pub fn apply(&self, root: &mut XmlNode) -> Result<()> {
        debug!("Setting style on document level.");
        root.set_attribute("BondSpacing", self.style.bond_spacing.clone());
        root.set_attribute("BondLength", self.style.bond_length.clone());
        root.set_attribute("BoldWidth", self.style.bold_width.clone());
        root.set_attribute("LineWidth", self.style.line_width.clone());
        root.set_attribute("MarginWidth", self.style.margin_width.clone());
        root.set_attribute("HashSpacing", self.style.hash_spacing.clone());
        root.set_attribute("CaptionSize", self.style.caption_size.clone());
        root.set_attribute("LabelSize", self.style.label_size.clone());
        root.set_attribute("LabelFace", self.style.label_face.clone());
        root.set_attribute("LabelFont", self.style.label_font.clone());

        // a document without the attribute does not hide implicit hydrogens
        let implicit_h_source = root
            .attribute("HideImplicitHydrogens")
            .unwrap_or("no")
            .to_string();
        root.set_attribute("HideImplicitHydrogens", self.style.hide_implicit_hydrogens.clone());
        let implicit_h_changed = implicit_h_source != self.style.hide_implicit_hydrogens;

        let bond_length: f64 = self.style.bond_length.parse()?;
        self.style_descendant_fragments(root, bond_length, implicit_h_changed)
    }

    fn style_descendant_fragments(
        &self,
        node: &mut XmlNode,
        bond_length: f64,
        implicit_h_changed: bool,
    ) -> Result<()> {
        for child in node.child_nodes.iter_mut() {
            if child.name == "fragment" {
                self.style_fragment(child, bond_length, implicit_h_changed)?;
            }
            self.style_descendant_fragments(child, bond_length, implicit_h_changed)?;
        }
        Ok(())
    }

    fn style_fragment(
        &self,
        fragment: &mut XmlNode,
        bond_length: f64,
        implicit_h_changed: bool,
    ) -> Result<()> {
        debug!(
            "Applying style to fragment with id {}.",
            fragment.attribute("id").unwrap_or("?")
        );
        add_missing_bounding_box(fragment)?;

        debug!("Getting coordinates and mapping.");
        let mut coords: Vec<(f64, f64)> = Vec::new();
        let mut node_id_mapping: HashMap<i64, usize> = HashMap::new();
        let mut label_coords: Vec<(f64, f64)> = Vec::new();
        for_each_descendant(fragment, "n", &mut |node| {
            let position = node.attribute("p").ok_or_else(|| NoCoordinatesError {})?;
            let node_id: i64 = node
                .attribute("id")
                .ok_or_else(|| NoCoordinatesError {})?
                .parse()?;
            node_id_mapping.insert(node_id, coords.len());
            coords.push(parse_point(position)?);
            for_each_descendant(node, "t", &mut |t| {
                if let Some(label_position) = t.attribute("p") {
                    label_coords.push(parse_point(label_position)?);
                }
                Ok(())
            })
        })?;

        // bonds are collected and scrubbed in the same pass
        let mut bonds: Vec<(i64, i64)> = Vec::new();
        for_each_descendant_mut(fragment, "b", &mut |bond| {
            let begin = bond.attribute("B").ok_or_else(|| NoCoordinatesError {})?.parse()?;
            let end = bond.attribute("E").ok_or_else(|| NoCoordinatesError {})?.parse()?;
            bonds.push((begin, end));
            retain_attributes(bond, BOND_ATTRIBUTES);
            Ok(())
        })?;

        if coords.is_empty() {
            return Err(NoAtomsError {}.into());
        }
        if coords.len() == 1 {
            // usually a caption-like single node, only the label style applies
            debug!("Found single node fragment. Applying label style only.");
            return self.restyle_labels(fragment);
        }

        debug!("Calculating scaling.");
        let scaling_factor = match average_bond_length(&coords, &bonds, &node_id_mapping)? {
            Some(average) => bond_length / average,
            None => 1.0,
        };
        let final_coords = scale_and_recenter(&coords, scaling_factor);
        let final_labels = scale_and_recenter(&label_coords, scaling_factor);

        fix_bounding_box(fragment, scaling_factor)?;

        debug!("Applying new coordinates and label styles.");
        let mut node_idx = 0;
        let mut label_idx = 0;
        let style = &self.style;
        for_each_descendant_mut(fragment, "n", &mut |node| {
            let (x, y) = final_coords[node_idx];
            node.set_attribute("p", format!("{} {}", format_float(x), format_float(y)));
            node_idx += 1;
            retain_attributes(node, NODE_ATTRIBUTES);

            let num_hydrogens: Option<u32> =
                node.attribute("NumHydrogens").and_then(|value| value.parse().ok());
            for_each_descendant_mut(node, "t", &mut |t| {
                if t.attribute("p").is_some() {
                    let (x, y) = final_labels[label_idx];
                    t.set_attribute("p", format!("{} {}", format_float(x), format_float(y)));
                    label_idx += 1;
                }
                retain_attributes(t, TEXT_ATTRIBUTES);
                for s in t.child_nodes.iter_mut().filter(|child| child.name == "s") {
                    s.set_attribute("size", style.label_size.clone());
                    s.set_attribute("face", style.label_face.clone());
                    s.set_attribute("font", style.label_font.clone());
                    if implicit_h_changed {
                        if let Some(count) = num_hydrogens.filter(|count| *count > 0) {
                            toggle_implicit_hydrogens(s, count, style.hide_implicit_hydrogens == "yes");
                        }
                    }
                }
                Ok(())
            })
        })
    }

    fn restyle_labels(&self, fragment: &mut XmlNode) -> Result<()> {
        let style = &self.style;
        for_each_descendant_mut(fragment, "s", &mut |s| {
            s.set_attribute("size", style.label_size.clone());
            s.set_attribute("face", style.label_face.clone());
            s.set_attribute("font", style.label_font.clone());
            Ok(())
        })
    }
}

/// Synthesizes a fragment bounding box from its node positions when absent.
/// A fragment whose nodes carry no positions cannot be styled.
fn add_missing_bounding_box(fragment: &mut XmlNode) -> Result<()> {
    if fragment.attribute("BoundingBox").is_some() {
        return Ok(());
    }
    let mut coords: Vec<(f64, f64)> = Vec::new();
    for_each_descendant(fragment, "n", &mut |node| {
        let position = node.attribute("p").ok_or_else(|| NoCoordinatesError {})?;
        coords.push(parse_point(position)?);
        Ok(())
    })?;
    if coords.is_empty() {
        return Ok(());
    }
    let (min, max) = bounds(&coords);
    fragment.set_attribute(
        "BoundingBox",
        format!(
            "{} {} {} {}",
            format_float(min.0),
            format_float(min.1),
            format_float(max.0),
            format_float(max.1)
        ),
    );
    Ok(())
}

/// Mean euclidean bond length rounded to one decimal, or None for a fragment
/// without bonds.
fn average_bond_length(
    coords: &[(f64, f64)],
    bonds: &[(i64, i64)],
    node_id_mapping: &HashMap<i64, usize>,
) -> Result<Option<f64>> {
    if bonds.is_empty() {
        return Ok(None);
    }
    let mut total = 0.0;
    for (begin, end) in bonds {
        let begin = coords[*node_id_mapping.get(begin).ok_or_else(|| NoCoordinatesError {})?];
        let end = coords[*node_id_mapping.get(end).ok_or_else(|| NoCoordinatesError {})?];
        total += ((begin.0 - end.0).powi(2) + (begin.1 - end.1).powi(2)).sqrt();
    }
    let average = (total / bonds.len() as f64 * 10.0).round() / 10.0;
    Ok(Some(average))
}

/// Scales uniformly, then translates so the axis aligned bounding box of the
/// point set keeps its original midpoint.
fn scale_and_recenter(coords: &[(f64, f64)], scaling_factor: f64) -> Vec<(f64, f64)> {
    if coords.is_empty() {
        return Vec::new();
    }
    let scaled: Vec<(f64, f64)> = coords
        .iter()
        .map(|(x, y)| (x * scaling_factor, y * scaling_factor))
        .collect();
    let center = box_center(coords);
    let scaled_center = box_center(&scaled);
    let translate = (center.0 - scaled_center.0, center.1 - scaled_center.1);
    scaled
        .iter()
        .map(|(x, y)| (x + translate.0, y + translate.1))
        .collect()
}

fn fix_bounding_box(fragment: &mut XmlNode, scaling_factor: f64) -> Result<()> {
    let bounding_box = fragment
        .attribute("BoundingBox")
        .ok_or_else(|| MissingAttributeError::new("fragment", "BoundingBox"))?;
    let values: Vec<f64> = bounding_box
        .split_whitespace()
        .map(str::parse)
        .collect::<::std::result::Result<_, _>>()?;
    if values.len() != 4 {
        return Err(MissingAttributeError::new("fragment", "BoundingBox").into());
    }
    let corners = [(values[0], values[1]), (values[2], values[3])];
    let rescaled = scale_and_recenter(&corners, scaling_factor);
    fragment.set_attribute(
        "BoundingBox",
        format!(
            "{} {} {} {}",
            format_float(round2(rescaled[0].0)),
            format_float(round2(rescaled[0].1)),
            format_float(round2(rescaled[1].0)),
            format_float(round2(rescaled[1].1))
        ),
    );
    Ok(())
}

/// Rewrites an atom label for the new implicit hydrogen display setting: either
/// appends H (or Hn) or truncates the label back to its element symbol.
fn toggle_implicit_hydrogens(s: &mut XmlNode, num_hydrogens: u32, hide: bool) {
    let text = s.text_or_empty().to_string();
    if text.is_empty() {
        return;
    }
    let rewritten = if hide {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 2 {
            text.clone()
        } else if chars[1] == 'H' {
            // one letter element symbol
            chars[0].to_string()
        } else {
            // two letter element symbol
            chars[0..2].iter().collect()
        }
    } else if num_hydrogens == 1 {
        format!("{}H", text)
    } else {
        format!("{}H{}", text, num_hydrogens)
    };
    info!("Rewrote atom label '{}' as '{}'.", text, rewritten);
    s.text = Some(rewritten);
}

fn retain_attributes(element: &mut XmlNode, wanted: &[&str]) {
    let element_name = element.name.clone();
    element.attributes.retain(|(name, _)| {
        let keep = wanted.contains(&name.as_str());
        if !keep {
            info!("Deleting unneeded attribute {} from {} element.", name, element_name);
        }
        keep
    });
}

fn parse_point(value: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(NoCoordinatesError {}.into());
    }
    Ok((parts[0].parse()?, parts[1].parse()?))
}

fn bounds(coords: &[(f64, f64)]) -> ((f64, f64), (f64, f64)) {
    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for (x, y) in coords {
        min.0 = min.0.min(*x);
        min.1 = min.1.min(*y);
        max.0 = max.0.max(*x);
        max.1 = max.1.max(*y);
    }
    (min, max)
}

fn box_center(coords: &[(f64, f64)]) -> (f64, f64) {
    let (min, max) = bounds(coords);
    ((min.0 + max.0) / 2.0, (min.1 + max.1) / 2.0)
}

fn for_each_descendant(
    node: &XmlNode,
    name: &str,
    visit: &mut dyn FnMut(&XmlNode) -> Result<()>,
) -> Result<()> {
    for child in &node.child_nodes {
        if child.name == name {
            visit(child)?;
        }
        for_each_descendant(child, name, visit)?;
    }
    Ok(())
}

fn for_each_descendant_mut(
    node: &mut XmlNode,
    name: &str,
    visit: &mut dyn FnMut(&mut XmlNode) -> Result<()>,
) -> Result<()> {
    for child in node.child_nodes.iter_mut() {
        if child.name == name {
            visit(child)?;
        }
        for_each_descendant_mut(child, name, visit)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NoAtomsError, UnknownStyleError};

    fn two_atom_fragment() -> String {
        concat!(
            "<CDXML HideImplicitHydrogens=\"no\"><page id=\"10\">",
            "<fragment id=\"11\" BoundingBox=\"0 0 10 0\">",
            "<n id=\"1\" p=\"0 0\"/>",
            "<n id=\"2\" p=\"10 0\"/>",
            "<b id=\"3\" B=\"1\" E=\"2\" Order=\"1\" LineWidth=\"2\"/>",
            "</fragment></page></CDXML>"
        )
        .to_string()
    }

    fn coords_of(node: &XmlNode) -> (f64, f64) {
        parse_point(node.attribute("p").unwrap()).unwrap()
    }

    #[test]
    fn test_two_atom_fragment_scaling() {
        let styler = CdxmlStyler::new(Style::acs_1996());
        let mut root = XmlNode::from_str(&two_atom_fragment()).unwrap();
        styler.apply(&mut root).unwrap();

        let fragment = &root.child_nodes[0].child_nodes[0];
        let first = coords_of(&fragment.child_nodes[0]);
        let second = coords_of(&fragment.child_nodes[1]);
        // scaled by 14.4 / 10 and recentered on the original midpoint (5, 0)
        assert!((first.0 + 2.2).abs() < 1e-9);
        assert!((second.0 - 12.2).abs() < 1e-9);
        assert!(first.1.abs() < 1e-9 && second.1.abs() < 1e-9);

        // resulting bond length matches the preset within rounding
        let length = ((second.0 - first.0).powi(2) + (second.1 - first.1).powi(2)).sqrt();
        assert!((length - 14.4).abs() < 0.1);
    }

    #[test]
    fn test_bond_attributes_are_whitelisted() {
        let styler = CdxmlStyler::new(Style::acs_1996());
        let mut root = XmlNode::from_str(&two_atom_fragment()).unwrap();
        styler.apply(&mut root).unwrap();

        let bond = &root.child_nodes[0].child_nodes[0].child_nodes[2];
        assert_eq!(bond.attribute("Order"), Some("1"));
        assert_eq!(bond.attribute("LineWidth"), None);
        for (name, _) in &bond.attributes {
            assert!(BOND_ATTRIBUTES.contains(&name.as_str()));
        }
    }

    #[test]
    fn test_document_level_keys_are_set() {
        let styler = CdxmlStyler::new(Style::wiley());
        let mut root = XmlNode::from_str(&two_atom_fragment()).unwrap();
        styler.apply(&mut root).unwrap();
        assert_eq!(root.attribute("BondLength"), Some("17"));
        assert_eq!(root.attribute("BoldWidth"), Some("2.6"));
        assert_eq!(root.attribute("LabelFace"), Some("96"));
        assert_eq!(root.attribute("HideImplicitHydrogens"), Some("no"));
    }

    #[test]
    fn test_bounding_box_is_rescaled_and_rounded() {
        let styler = CdxmlStyler::new(Style::acs_1996());
        let mut root = XmlNode::from_str(&two_atom_fragment()).unwrap();
        styler.apply(&mut root).unwrap();
        let fragment = &root.child_nodes[0].child_nodes[0];
        assert_eq!(fragment.attribute("BoundingBox"), Some("-2.2 0 12.2 0"));
    }

    #[test]
    fn test_missing_bounding_box_is_computed() {
        let source = concat!(
            "<CDXML><page><fragment id=\"11\">",
            "<n id=\"1\" p=\"1 2\"/><n id=\"2\" p=\"4 6\"/>",
            "<b id=\"3\" B=\"1\" E=\"2\"/>",
            "</fragment></page></CDXML>"
        );
        let mut fragment = XmlNode::from_str(source).unwrap();
        add_missing_bounding_box(&mut fragment.child_nodes[0].child_nodes[0]).unwrap();
        assert_eq!(
            fragment.child_nodes[0].child_nodes[0].attribute("BoundingBox"),
            Some("1 2 4 6")
        );
    }

    #[test]
    fn test_fragment_without_atoms_is_an_error() {
        let source = "<CDXML><page><fragment id=\"9\" BoundingBox=\"0 0 1 1\"/></page></CDXML>";
        let styler = CdxmlStyler::new(Style::acs_1996());
        let mut root = XmlNode::from_str(source).unwrap();
        let err = styler.apply(&mut root).unwrap_err();
        assert!(err.downcast_ref::<NoAtomsError>().is_some());
    }

    #[test]
    fn test_fragment_without_coordinates_is_an_error() {
        let source = "<CDXML><page><fragment id=\"9\"><n id=\"1\"/></fragment></page></CDXML>";
        let styler = CdxmlStyler::new(Style::acs_1996());
        let mut root = XmlNode::from_str(source).unwrap();
        let err = styler.apply(&mut root).unwrap_err();
        assert!(err.downcast_ref::<NoCoordinatesError>().is_some());
    }

    #[test]
    fn test_single_atom_fragment_restyles_labels_only() {
        let source = concat!(
            "<CDXML><page>",
            "<fragment id=\"9\" BoundingBox=\"0 0 1 1\">",
            "<n id=\"1\" p=\"3 4\"><t p=\"3 4\"><s font=\"1\" size=\"14\" face=\"0\">HCl</s></t></n>",
            "</fragment></page></CDXML>"
        );
        let styler = CdxmlStyler::new(Style::acs_1996());
        let mut root = XmlNode::from_str(source).unwrap();
        styler.apply(&mut root).unwrap();

        let node = &root.child_nodes[0].child_nodes[0].child_nodes[0];
        assert_eq!(node.attribute("p"), Some("3 4"));
        let s = &node.child_nodes[0].child_nodes[0];
        assert_eq!(s.attribute("size"), Some("10"));
        assert_eq!(s.attribute("face"), Some("96"));
        assert_eq!(s.attribute("font"), Some("3"));
        assert_eq!(s.text.as_deref(), Some("HCl"));
    }

    #[test]
    fn test_show_implicit_hydrogens_appends_label_text() {
        let source = concat!(
            "<CDXML HideImplicitHydrogens=\"yes\"><page>",
            "<fragment id=\"11\" BoundingBox=\"0 0 10 0\">",
            "<n id=\"1\" p=\"0 0\" NumHydrogens=\"2\">",
            "<t p=\"0 0\"><s font=\"3\" size=\"10\" face=\"96\">O</s></t></n>",
            "<n id=\"2\" p=\"10 0\" NumHydrogens=\"1\">",
            "<t p=\"10 0\"><s font=\"3\" size=\"10\" face=\"96\">Cl</s></t></n>",
            "<b id=\"3\" B=\"1\" E=\"2\"/>",
            "</fragment></page></CDXML>"
        );
        let styler = CdxmlStyler::new(Style::acs_1996()); // hides nothing
        let mut root = XmlNode::from_str(source).unwrap();
        styler.apply(&mut root).unwrap();

        let fragment = &root.child_nodes[0].child_nodes[0];
        let first_label = &fragment.child_nodes[0].child_nodes[0].child_nodes[0];
        let second_label = &fragment.child_nodes[1].child_nodes[0].child_nodes[0];
        assert_eq!(first_label.text.as_deref(), Some("OH2"));
        assert_eq!(second_label.text.as_deref(), Some("ClH"));
    }

    #[test]
    fn test_hide_implicit_hydrogens_truncates_label_text() {
        let source = concat!(
            "<CDXML HideImplicitHydrogens=\"no\"><page>",
            "<fragment id=\"11\" BoundingBox=\"0 0 10 0\">",
            "<n id=\"1\" p=\"0 0\" NumHydrogens=\"2\">",
            "<t p=\"0 0\"><s font=\"3\" size=\"10\" face=\"96\">OH2</s></t></n>",
            "<n id=\"2\" p=\"10 0\" NumHydrogens=\"1\">",
            "<t p=\"10 0\"><s font=\"3\" size=\"10\" face=\"96\">ClH</s></t></n>",
            "<b id=\"3\" B=\"1\" E=\"2\"/>",
            "</fragment></page></CDXML>"
        );
        let mut style = Style::acs_1996();
        style.hide_implicit_hydrogens = String::from("yes");
        let styler = CdxmlStyler::new(style);
        let mut root = XmlNode::from_str(source).unwrap();
        styler.apply(&mut root).unwrap();

        let fragment = &root.child_nodes[0].child_nodes[0];
        let first_label = &fragment.child_nodes[0].child_nodes[0].child_nodes[0];
        let second_label = &fragment.child_nodes[1].child_nodes[0].child_nodes[0];
        assert_eq!(first_label.text.as_deref(), Some("O"));
        assert_eq!(second_label.text.as_deref(), Some("Cl"));
    }

    #[test]
    fn test_element_counts_survive_styling() {
        let source = concat!(
            "<CDXML><page>",
            "<fragment id=\"11\" BoundingBox=\"0 0 10 0\">",
            "<n id=\"1\" p=\"0 0\"><t p=\"0 0\"><s font=\"3\" size=\"10\" face=\"96\">N</s></t></n>",
            "<n id=\"2\" p=\"10 0\"/>",
            "<n id=\"4\" p=\"5 8\"/>",
            "<b id=\"3\" B=\"1\" E=\"2\"/>",
            "<b id=\"5\" B=\"2\" E=\"4\"/>",
            "</fragment></page></CDXML>"
        );
        let styler = CdxmlStyler::new(Style::acs_1996());
        let mut root = XmlNode::from_str(source).unwrap();

        let count = |root: &XmlNode, name: &str| {
            let mut total = 0;
            for_each_descendant(root, name, &mut |_| {
                total += 1;
                Ok(())
            })
            .unwrap();
            total
        };
        let before = (count(&root, "n"), count(&root, "b"), count(&root, "t"), count(&root, "s"));
        styler.apply(&mut root).unwrap();
        let after = (count(&root, "n"), count(&root, "b"), count(&root, "t"), count(&root, "s"));
        assert_eq!(before, after);
    }

    #[test]
    fn test_style_from_document_and_unknown_preset() {
        let styler = CdxmlStyler::new(Style::wiley());
        let mut root = XmlNode::from_str(&two_atom_fragment()).unwrap();
        styler.apply(&mut root).unwrap();
        let extracted = Style::from_document(&root).unwrap();
        assert_eq!(extracted, Style::wiley());

        let err = Style::by_name("ACS 1997").unwrap_err();
        assert!(err.downcast_ref::<UnknownStyleError>().is_some());
    }
}
