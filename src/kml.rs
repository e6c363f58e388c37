//! Minimal KML writer for points and cell outlines.
use std::{borrow::Cow, io};

use h3o::LatLng;

const PUSHPIN_STYLE: &str = "<Style id=\"m_ylw-pushpin\"><IconStyle><scale>1.1</scale><Icon><href>http://maps.google.com/mapfiles/kml/pushpin/ylw-pushpin.png</href></Icon><hotSpot x=\"20\" y=\"2\" xunits=\"pixels\" yunits=\"pixels\"/></IconStyle></Style>";
const LINE_STYLE: &str =
    "<Style id=\"lineStyle1\"><LineStyle><color>ff0000ff</color><width>2</width></LineStyle></Style>";

pub fn header(out: &mut impl io::Write, name: &str, description: &str) -> io::Result<()> {
    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(out, "<kml xmlns=\"http://www.opengis.net/kml/2.2\">")?;
    writeln!(out, "<Folder>")?;
    writeln!(out, "<name>{}</name>", escape(name))?;
    writeln!(out, "<description>{}</description>", escape(description))?;
    writeln!(out, "{PUSHPIN_STYLE}")?;
    writeln!(out, "{LINE_STYLE}")
}

pub fn footer(out: &mut impl io::Write) -> io::Result<()> {
    writeln!(out, "</Folder>")?;
    writeln!(out, "</kml>")
}

pub fn point(out: &mut impl io::Write, ll: LatLng, name: &str) -> io::Result<()> {
    writeln!(out, "<Placemark>")?;
    writeln!(out, "<name>{}</name>", escape(name))?;
    writeln!(out, "<styleUrl>#m_ylw-pushpin</styleUrl>")?;
    writeln!(out, "<Point>")?;
    writeln!(out, "<altitudeMode>relativeToGround</altitudeMode>")?;
    writeln!(out, "<coordinates>")?;
    coordinate(out, ll)?;
    writeln!(out, "</coordinates>")?;
    writeln!(out, "</Point>")?;
    writeln!(out, "</Placemark>")
}

/// Writes `vertices` as a closed line string.
pub fn outline(out: &mut impl io::Write, vertices: &[LatLng], name: &str) -> io::Result<()> {
    writeln!(out, "<Placemark>")?;
    writeln!(out, "<name>{}</name>", escape(name))?;
    writeln!(out, "<styleUrl>#lineStyle1</styleUrl>")?;
    writeln!(out, "<LineString>")?;
    writeln!(out, "<tessellate>1</tessellate>")?;
    writeln!(out, "<coordinates>")?;
    for &ll in vertices.iter().chain(vertices.first()) {
        coordinate(out, ll)?;
    }
    writeln!(out, "</coordinates>")?;
    writeln!(out, "</LineString>")?;
    writeln!(out, "</Placemark>")
}

fn coordinate(out: &mut impl io::Write, ll: LatLng) -> io::Result<()> {
    writeln!(out, "            {:8.6},{:8.6},5.0", ll.lng(), ll.lat())
}

fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut buf = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => buf.push_str("&amp;"),
            '<' => buf.push_str("&lt;"),
            '>' => buf.push_str("&gt;"),
            '"' => buf.push_str("&quot;"),
            '\'' => buf.push_str("&apos;"),
            c => buf.push(c),
        }
    }
    Cow::Owned(buf)
}
