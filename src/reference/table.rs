use super::types::{DiseaseId, DiseaseRecord};
use crate::classifier::Severity;

static COLLETOTRICHUM_BLIGHT: DiseaseRecord = DiseaseRecord {
    id: DiseaseId::ColletotrichumBlight,
    name_local: "कोलेटोट्रिकम ब्लाइट",
    name_reference: "Colletotrichum Blight",
    description: "कोलेटोट्रिकम ग्लोइओस्पोरियोइड्स (Colletotrichum gloeosporioides) नामक ढुसीले लगाउने यो रोग अलैंचीको पातमा छिटो फैलिन्छ। पातको टुप्पा र किनाराबाट सुरु भएर पूरै पात डढेजस्तो देखिन्छ र गम्भीर अवस्थामा बोट नै कमजोर हुन्छ।",
    symptoms: &[
        "पातको टुप्पा र किनारामा खैरो वा रातो-खैरो पानी भिजेजस्तो दाग देखिनु",
        "दागहरू ठूला हुँदै आपसमा जोडिएर पात डढेजस्तो देखिनु",
        "दागको बीचमा खरानी रङ र वरिपरि पहेंलो घेरा बन्नु",
        "पात सुकेर झर्नु र बोटको वृद्धि रोकिनु",
    ],
    causes: "ढुसी (Colletotrichum gloeosporioides) बाट लाग्ने यो रोग लगातारको वर्षा, उच्च आर्द्रता र २०-३० डिग्री सेल्सियसको तापक्रममा छिटो फैलिन्छ। संक्रमित पातका टुक्रा, वर्षाको छिटा र हावाबाट यसका बीजाणु सर्छन्।",
    treatments: &[
        "संक्रमित पात र बोटका भाग काटेर खेतबाट टाढा लगेर नष्ट गर्नुहोस्।",
        "कपर अक्सिक्लोराइड (०.२५%) वा बोर्डो मिश्रण (१%) १५-२० दिनको फरकमा छर्नुहोस्।",
        "रोग बढ्दै गएमा कृषि प्राविधिकको सल्लाहमा कार्बेन्डाजिम (०.१%) जस्ता प्रणालीगत ढुसीनाशक प्रयोग गर्नुहोस्।",
        "औषधि वर्षा नभएको दिन छर्नुहोस्।",
    ],
    preventions: &[
        "बोटबीच उचित दूरी राखी हावा चल्ने बनाउनुहोस्।",
        "बाक्लो छहारी घटाउन छायाँ दिने रुखका हाँगा छिमल्नुहोस्।",
        "खेतमा पानी जम्न नदिन निकासको व्यवस्था गर्नुहोस्।",
        "स्वस्थ र रोगमुक्त बेर्ना मात्र रोप्नुहोस्।",
    ],
    when_to_act: "पहिलो दाग देख्नासाथ संक्रमित पात हटाउनुहोस् र ढुसीनाशक छर्नुहोस्। वर्षायाममा यो रोग केही दिनमै पूरै बगानमा फैलिन सक्छ।",
    severity: Severity::High,
};

static PHYLLOSTICTA_LEAF_SPOT: DiseaseRecord = DiseaseRecord {
    id: DiseaseId::PhyllostictaLeafSpot,
    name_local: "फाइलोस्टिक्टा पात दाग",
    name_reference: "Phyllosticta Leaf Spot",
    description: "फाइलोस्टिक्टा इलेटारी (Phyllosticta elettariae) ढुसीले लगाउने यो रोगमा पातमा साना गोलो दागहरू देखिन्छन्। यो रोग विशेषगरी नर्सरी र कलिला बोटमा बढी लाग्छ।",
    symptoms: &[
        "पातमा साना, गोलो वा अण्डाकार पानी भिजेजस्ता दाग देखिनु",
        "दागको बीच भाग सेतो-खरानी र किनारा खैरो हुनु",
        "पुरानो दागको बीच भाग झरेर प्वाल पर्नु",
        "धेरै दाग भएका पात पहेंलिएर सुक्नु",
    ],
    causes: "ढुसी (Phyllosticta elettariae) बाट लाग्ने यो रोग फागुनदेखि जेठसम्म, हल्का वर्षा र उच्च आर्द्रताको समयमा बढी देखिन्छ। बीजाणु वर्षाको छिटा र संक्रमित बोटबाट सर्छन्।",
    treatments: &[
        "दाग भएका पात टिपेर नष्ट गर्नुहोस्।",
        "मन्कोजेब (०.२%) वा कपर अक्सिक्लोराइड (०.२५%) १५ दिनको फरकमा २-३ पटक छर्नुहोस्।",
        "नर्सरीमा बोर्डो मिश्रण (१%) छर्नुहोस्।",
    ],
    preventions: &[
        "नर्सरी बेडमा बेर्ना बाक्लो नराख्नुहोस्।",
        "सिँचाइ गर्दा पात भिजाउनुको सट्टा जरामा पानी दिनुहोस्।",
        "बगान सफा राखी झरेका पात नियमित हटाउनुहोस्।",
        "रोग देखिने मौसम अघि नै सुरक्षात्मक ढुसीनाशक छर्नुहोस्।",
    ],
    when_to_act: "नर्सरी वा कलिला बोटमा दाग देखिएमा एक हप्ताभित्र उपचार सुरु गर्नुहोस्। ठूला बोटमा थोरै दाग भए नियमित निगरानी गर्नुहोस्।",
    severity: Severity::Medium,
};

static HEALTHY: DiseaseRecord = DiseaseRecord {
    id: DiseaseId::Healthy,
    name_local: "स्वस्थ",
    name_reference: "Healthy",
    description: "पात स्वस्थ देखिन्छ। रोगका कुनै स्पष्ट लक्षण पहिचान भएनन्।",
    symptoms: &[
        "पात एकनासे हरियो र चम्किलो हुनु",
        "पातमा दाग, डढेको भाग वा प्वाल नहुनु",
        "नयाँ पात सामान्य रूपमा पलाउनु र बढ्नु",
    ],
    causes: "उचित छहारी, सन्तुलित मलखाद र राम्रो सरसफाइले बोटलाई स्वस्थ राख्छ।",
    treatments: &[
        "कुनै उपचार आवश्यक छैन।",
        "नियमित हेरचाह र मलजल जारी राख्नुहोस्।",
    ],
    preventions: &[
        "हरेक हप्ता बगानको निरीक्षण गर्नुहोस्।",
        "झरेका र सुकेका पात हटाउनुहोस्।",
        "सन्तुलित मलखाद दिनुहोस्।",
        "खेतमा पानीको निकास राम्रो बनाउनुहोस्।",
    ],
    when_to_act: "अहिले कुनै कारबाही आवश्यक छैन। पातमा दाग वा रङ परिवर्तन देखिएमा फेरि तस्बिर खिचेर जाँच गर्नुहोस्।",
    severity: Severity::Low,
};

pub(super) fn record(id: DiseaseId) -> &'static DiseaseRecord {
    match id {
        DiseaseId::ColletotrichumBlight => &COLLETOTRICHUM_BLIGHT,
        DiseaseId::PhyllostictaLeafSpot => &PHYLLOSTICTA_LEAF_SPOT,
        DiseaseId::Healthy => &HEALTHY,
    }
}
