//! Static lookup tables shared by every generator.
//!
//! All tables are compile-time constants. Vectors are packed flat: two floats
//! per entry in the 2D tables, four (x, y, z, unused) in the 3D tables, so a
//! masked hash can index the first component directly.

/// 128 unit gradients cycling through 24 directions spaced 15° apart,
/// starting at 82.5°.
pub const GRADIENTS_2D: [f32; 256] = [
     0.130526192,  0.991444861,  0.382683432,  0.923879533,  0.608761429,  0.793353340,  0.793353340,  0.608761429,
     0.923879533,  0.382683432,  0.991444861,  0.130526192,  0.991444861, -0.130526192,  0.923879533, -0.382683432,
     0.793353340, -0.608761429,  0.608761429, -0.793353340,  0.382683432, -0.923879533,  0.130526192, -0.991444861,
    -0.130526192, -0.991444861, -0.382683432, -0.923879533, -0.608761429, -0.793353340, -0.793353340, -0.608761429,
    -0.923879533, -0.382683432, -0.991444861, -0.130526192, -0.991444861,  0.130526192, -0.923879533,  0.382683432,
    -0.793353340,  0.608761429, -0.608761429,  0.793353340, -0.382683432,  0.923879533, -0.130526192,  0.991444861,
     0.130526192,  0.991444861,  0.382683432,  0.923879533,  0.608761429,  0.793353340,  0.793353340,  0.608761429,
     0.923879533,  0.382683432,  0.991444861,  0.130526192,  0.991444861, -0.130526192,  0.923879533, -0.382683432,
     0.793353340, -0.608761429,  0.608761429, -0.793353340,  0.382683432, -0.923879533,  0.130526192, -0.991444861,
    -0.130526192, -0.991444861, -0.382683432, -0.923879533, -0.608761429, -0.793353340, -0.793353340, -0.608761429,
    -0.923879533, -0.382683432, -0.991444861, -0.130526192, -0.991444861,  0.130526192, -0.923879533,  0.382683432,
    -0.793353340,  0.608761429, -0.608761429,  0.793353340, -0.382683432,  0.923879533, -0.130526192,  0.991444861,
     0.130526192,  0.991444861,  0.382683432,  0.923879533,  0.608761429,  0.793353340,  0.793353340,  0.608761429,
     0.923879533,  0.382683432,  0.991444861,  0.130526192,  0.991444861, -0.130526192,  0.923879533, -0.382683432,
     0.793353340, -0.608761429,  0.608761429, -0.793353340,  0.382683432, -0.923879533,  0.130526192, -0.991444861,
    -0.130526192, -0.991444861, -0.382683432, -0.923879533, -0.608761429, -0.793353340, -0.793353340, -0.608761429,
    -0.923879533, -0.382683432, -0.991444861, -0.130526192, -0.991444861,  0.130526192, -0.923879533,  0.382683432,
    -0.793353340,  0.608761429, -0.608761429,  0.793353340, -0.382683432,  0.923879533, -0.130526192,  0.991444861,
     0.130526192,  0.991444861,  0.382683432,  0.923879533,  0.608761429,  0.793353340,  0.793353340,  0.608761429,
     0.923879533,  0.382683432,  0.991444861,  0.130526192,  0.991444861, -0.130526192,  0.923879533, -0.382683432,
     0.793353340, -0.608761429,  0.608761429, -0.793353340,  0.382683432, -0.923879533,  0.130526192, -0.991444861,
    -0.130526192, -0.991444861, -0.382683432, -0.923879533, -0.608761429, -0.793353340, -0.793353340, -0.608761429,
    -0.923879533, -0.382683432, -0.991444861, -0.130526192, -0.991444861,  0.130526192, -0.923879533,  0.382683432,
    -0.793353340,  0.608761429, -0.608761429,  0.793353340, -0.382683432,  0.923879533, -0.130526192,  0.991444861,
     0.130526192,  0.991444861,  0.382683432,  0.923879533,  0.608761429,  0.793353340,  0.793353340,  0.608761429,
     0.923879533,  0.382683432,  0.991444861,  0.130526192,  0.991444861, -0.130526192,  0.923879533, -0.382683432,
     0.793353340, -0.608761429,  0.608761429, -0.793353340,  0.382683432, -0.923879533,  0.130526192, -0.991444861,
    -0.130526192, -0.991444861, -0.382683432, -0.923879533, -0.608761429, -0.793353340, -0.793353340, -0.608761429,
    -0.923879533, -0.382683432, -0.991444861, -0.130526192, -0.991444861,  0.130526192, -0.923879533,  0.382683432,
    -0.793353340,  0.608761429, -0.608761429,  0.793353340, -0.382683432,  0.923879533, -0.130526192,  0.991444861,
     0.130526192,  0.991444861,  0.382683432,  0.923879533,  0.608761429,  0.793353340,  0.793353340,  0.608761429,
     0.923879533,  0.382683432,  0.991444861,  0.130526192,  0.991444861, -0.130526192,  0.923879533, -0.382683432,
];

/// The 12 cube-edge directions repeated five times, then four of them once
/// more to fill 64 slots.
#[rustfmt::skip]
pub const GRADIENTS_3D: [f32; 256] = [
    0.0,  1.0,  1.0, 0.0,   0.0, -1.0,  1.0, 0.0,   0.0,  1.0, -1.0, 0.0,   0.0, -1.0, -1.0, 0.0,
    1.0,  0.0,  1.0, 0.0,  -1.0,  0.0,  1.0, 0.0,   1.0,  0.0, -1.0, 0.0,  -1.0,  0.0, -1.0, 0.0,
    1.0,  1.0,  0.0, 0.0,  -1.0,  1.0,  0.0, 0.0,   1.0, -1.0,  0.0, 0.0,  -1.0, -1.0,  0.0, 0.0,
    0.0,  1.0,  1.0, 0.0,   0.0, -1.0,  1.0, 0.0,   0.0,  1.0, -1.0, 0.0,   0.0, -1.0, -1.0, 0.0,
    1.0,  0.0,  1.0, 0.0,  -1.0,  0.0,  1.0, 0.0,   1.0,  0.0, -1.0, 0.0,  -1.0,  0.0, -1.0, 0.0,
    1.0,  1.0,  0.0, 0.0,  -1.0,  1.0,  0.0, 0.0,   1.0, -1.0,  0.0, 0.0,  -1.0, -1.0,  0.0, 0.0,
    0.0,  1.0,  1.0, 0.0,   0.0, -1.0,  1.0, 0.0,   0.0,  1.0, -1.0, 0.0,   0.0, -1.0, -1.0, 0.0,
    1.0,  0.0,  1.0, 0.0,  -1.0,  0.0,  1.0, 0.0,   1.0,  0.0, -1.0, 0.0,  -1.0,  0.0, -1.0, 0.0,
    1.0,  1.0,  0.0, 0.0,  -1.0,  1.0,  0.0, 0.0,   1.0, -1.0,  0.0, 0.0,  -1.0, -1.0,  0.0, 0.0,
    0.0,  1.0,  1.0, 0.0,   0.0, -1.0,  1.0, 0.0,   0.0,  1.0, -1.0, 0.0,   0.0, -1.0, -1.0, 0.0,
    1.0,  0.0,  1.0, 0.0,  -1.0,  0.0,  1.0, 0.0,   1.0,  0.0, -1.0, 0.0,  -1.0,  0.0, -1.0, 0.0,
    1.0,  1.0,  0.0, 0.0,  -1.0,  1.0,  0.0, 0.0,   1.0, -1.0,  0.0, 0.0,  -1.0, -1.0,  0.0, 0.0,
    0.0,  1.0,  1.0, 0.0,   0.0, -1.0,  1.0, 0.0,   0.0,  1.0, -1.0, 0.0,   0.0, -1.0, -1.0, 0.0,
    1.0,  0.0,  1.0, 0.0,  -1.0,  0.0,  1.0, 0.0,   1.0,  0.0, -1.0, 0.0,  -1.0,  0.0, -1.0, 0.0,
    1.0,  1.0,  0.0, 0.0,  -1.0,  1.0,  0.0, 0.0,   1.0, -1.0,  0.0, 0.0,  -1.0, -1.0,  0.0, 0.0,
    1.0,  1.0,  0.0, 0.0,   0.0, -1.0,  1.0, 0.0,  -1.0,  1.0,  0.0, 0.0,   0.0, -1.0, -1.0, 0.0,
];

/// 256 unit vectors with uniformly distributed angles. Used for cellular
/// feature-point jitter and for domain warp displacement.
pub const RAND_VECS_2D: [f32; 512] = [
    -0.089937504, -0.995947411,  0.876583655,  0.481249515, -0.113766707,  0.993507492,  0.904434078,  0.426613407,
     0.312712112,  0.949847954, -0.604534123, -0.796579245,  0.611069332,  0.791577078, -0.966116127,  0.258107786,
     0.540557728,  0.841306926,  0.520167375,  0.854064343, -0.444855101,  0.895602557, -0.317993201, -0.948092993,
     0.686350166, -0.727271236,  0.844438904, -0.535651880,  0.749573484, -0.661921137,  0.999468221, -0.032607896,
    -0.885965637, -0.463750893, -0.078757855, -0.996893776,  0.089226891, -0.996011326,  0.999937239,  0.011203471,
     0.043120921,  0.999069861, -0.815639183,  0.578560908, -0.742805390,  0.669507395,  0.912859971, -0.408272792,
     0.154179024,  0.988042929, -0.681522589,  0.731797077, -0.607192412,  0.794554828,  0.944628267, -0.328142405,
     0.999304532, -0.037288762,  0.801884712, -0.597478793, -0.238525189, -0.971136311,  0.930643605,  0.365926878,
     0.636813964, -0.771017494, -0.062801898, -0.998026013, -0.838288013,  0.545227665,  0.330441736, -0.943826392,
    -0.999264752,  0.038339992, -0.862776788,  0.505585022,  0.951190181,  0.308605315, -0.205459866, -0.978665542,
    -0.916260375,  0.400583232,  0.877766329, -0.479089002, -0.948399665, -0.317077395, -0.729779087,  0.683683029,
     0.537853979, -0.843038017,  0.751333656,  0.659922524, -0.868118690, -0.496356667,  0.323327519, -0.946287121,
    -0.911917242,  0.410374152,  0.558950919, -0.829200742,  0.003296313,  0.999994567, -0.216843032, -0.976206484,
    -0.069903099,  0.997553786, -0.946046731, -0.324030218,  0.453895866, -0.891054736, -0.969612187, -0.244647108,
     0.680311421,  0.732923168,  0.998420182,  0.056188435, -0.650530839, -0.759479840,  0.969335129,  0.245742563,
    -0.906320488, -0.422591023, -0.968849943, -0.247648519,  0.354527122, -0.935045731,  0.933174700,  0.359423120,
    -0.882616801, -0.470093165, -0.894419180, -0.447229617, -0.765992254,  0.642849801,  0.069318263, -0.997594596,
     0.304869292, -0.952394201,  0.821341390, -0.570436956,  0.831505049, -0.555517195, -0.986953360, -0.161006411,
     0.973632964, -0.228120258,  0.537876157,  0.843023867, -0.687601405, -0.726088361, -0.928850384,  0.370455076,
    -0.519868603,  0.854246238,  0.812618761, -0.582795632, -0.902473769, -0.430744816, -0.689864856, -0.723938175,
    -0.544314888, -0.838880982,  0.961758882, -0.273897521,  0.988819419,  0.149117929,  0.439293425, -0.898343635,
     0.348782455, -0.937203713,  0.620258617,  0.784397379, -0.828227737,  0.560391663,  0.323411181, -0.946258531,
    -0.919933869, -0.392073559, -0.394125944,  0.919056440,  0.154970837,  0.987919045, -0.924329584,  0.381595099,
    -0.996743488,  0.080637583, -0.463056617, -0.886328703,  0.995409577,  0.095706705, -0.616724424, -0.787179132,
    -0.318545645, -0.947907523, -0.906316617,  0.422599325,  0.991176621,  0.132547753,  0.520861519, -0.853641188,
     0.973404071,  0.229094989, -0.915441218,  0.402451707, -0.413251391,  0.910616982, -0.865653635, -0.500643370,
     0.782279907, -0.622927080, -0.978932068,  0.204186206,  0.828008598, -0.560715402, -0.511149811, -0.859491635,
     0.778674114,  0.627428581, -0.049680968, -0.998765138,  0.153266819, -0.988184842, -0.882214473,  0.470847772,
     0.898863467,  0.438228785,  0.872023065,  0.489464783,  0.969139230,  0.246514002, -0.871289892, -0.490768707,
    -0.998882942, -0.047253230, -0.976205556,  0.216847211, -0.969222506, -0.246186382, -0.995371915, -0.096097616,
    -0.721886479,  0.692011496, -0.999649686,  0.026467047,  0.451383338, -0.892330142,  0.789216493,  0.614115076,
    -0.959294382, -0.282408018, -0.632944412,  0.774197243, -0.996128747, -0.087906315, -0.188447166, -0.982083329,
    -0.625903651,  0.779900391,  0.081368544,  0.996684082, -0.471131483,  0.882062994,  0.991244602,  0.132038400,
    -0.919524343, -0.393033055, -0.958192802,  0.286123320,  0.145753373,  0.989320956,  0.954382666, -0.298586212,
    -0.071958507, -0.997407626,  0.561460118, -0.827503798, -0.448204634,  0.893930985,  0.988912924, -0.148496560,
     0.862454118, -0.506135253,  0.063575678,  0.997977020, -0.111743251,  0.993737111,  0.919004723, -0.394246521,
     0.983475390, -0.181041867,  0.840893354, -0.541200857,  0.974031369, -0.226413101, -0.322791425, -0.946470124,
     0.937657162, -0.347561572, -0.595951998,  0.803020060,  0.042650878,  0.999090037, -0.983558097,  0.180592000,
    -0.276698507,  0.960956782,  0.231654300, -0.972798173,  0.996120870,  0.087995520, -0.406415696,  0.913688285,
     0.909717263,  0.415228252,  0.893246416, -0.449567392,  0.376517839,  0.926409368, -0.988958152, -0.148195055,
     0.935777249, -0.352591748, -0.231565797,  0.972819244,  0.999889388, -0.014873166, -0.892075025, -0.451887319,
     0.999266490,  0.038294669,  0.720781648, -0.693162186, -0.444994961, -0.895533073, -0.798024423, -0.602625107,
    -0.104928401,  0.994479779,  0.999909572,  0.013447967,  0.401660691, -0.915788562, -0.750990451, -0.660313064,
     0.519953154, -0.854194777,  0.981365584,  0.192149919,  0.831231603, -0.555926274,  0.672076830,  0.740481421,
     0.379715157, -0.925103453,  0.999246178,  0.038821086,  0.981096786,  0.193517688, -0.809678264,  0.586874015,
     0.760292993, -0.649580299,  0.992612736,  0.121325827, -0.971426958, -0.237338713,  0.350062404, -0.936726381,
    -0.793480227, -0.608596031, -0.495215385, -0.868770235,  0.295409277, -0.955370797,  0.000747873,  0.999999720,
    -0.430219265,  0.902724423, -0.527501486,  0.849554108,  0.237884446, -0.971293463, -0.677003890,  0.735979438,
     0.279968234, -0.960009265, -0.640187549,  0.768218655, -0.228023723,  0.973655576,  0.143083211, -0.989710662,
    -0.374711381,  0.927141511,  0.972168880,  0.234281175,  0.720608720, -0.693341959, -0.662843807,  0.748757697,
    -0.073381121,  0.997303971,  0.550371531,  0.834919863, -0.815466101,  0.578804836,  0.370772528, -0.928723712,
     0.446553276,  0.894757046, -0.187479456, -0.982268524, -0.960177348,  0.279391233, -0.697257814, -0.716820438,
     0.932480604, -0.361220048, -0.637543518,  0.770414345,  0.984762541,  0.173904391, -0.510426363,  0.859921466,
     0.419337568,  0.907830383, -0.354222920,  0.935161014, -0.502926099, -0.864329416,  0.498359998, -0.866970191,
     0.226769986, -0.973948342, -0.232750183, -0.972536556, -0.836619837,  0.547783944, -0.853770413,  0.520649672,
    -0.755428547, -0.655231036, -0.985941011,  0.167093752, -0.870737328,  0.491748418,  0.592496413, -0.805573089,
     0.265263048, -0.964176081, -0.986125430,  0.166001917,  0.701799707, -0.712374320, -0.020652799,  0.999786708,
     0.858554443,  0.512722409,  0.346986631, -0.937870075,  0.445337176, -0.895362943, -0.613795541, -0.789465030,
     0.871287889, -0.490772263, -0.765975435,  0.642869842, -0.991067624, -0.133360285, -0.112864079, -0.993610437,
     0.426875067,  0.904310609,  0.348887415, -0.937164645, -0.998993159,  0.044862774, -0.100159835, -0.994971360,
    -0.687561038,  0.726126586,  0.840117001,  0.542405222, -0.111070750, -0.993812502, -0.944152131, -0.329509868,
     0.683212067, -0.730220015,  0.801095899, -0.598536015,  0.929962405,  0.367654627,  0.012251093, -0.999924953,
    -0.923335133, -0.383995094,  0.978400997,  0.206715962, -0.642329511,  0.766428601,  0.260880532, -0.965371093,
     0.903615983, -0.428343502, -0.006235409,  0.999980560,  0.517171796, -0.855881612,  0.818491072, -0.574519247,
];

/// 256 unit vectors uniformly distributed on the sphere, padded to stride 4.
pub const RAND_VECS_3D: [f32; 1024] = [
     0.257955951,  0.125884852, -0.957920525,  0.000000000,  0.390079847,  0.195524696,  0.899782088,  0.000000000,
    -0.245057576,  0.365976742, -0.897779377,  0.000000000,  0.845982001, -0.390574085, -0.362996333,  0.000000000,
    -0.423702528, -0.390360108,  0.817370879,  0.000000000, -0.203339774,  0.687401505, -0.697231746,  0.000000000,
    -0.780630395, -0.141148717,  0.608845814,  0.000000000,  0.188093714,  0.884422533, -0.427103661,  0.000000000,
     0.180793468, -0.725714980, -0.663815856,  0.000000000,  0.317661846,  0.728286690,  0.607198031,  0.000000000,
    -0.271919212, -0.876818408,  0.396546871,  0.000000000, -0.759387922, -0.553685562, -0.341704965,  0.000000000,
     0.820850646,  0.303427264, -0.483876133,  0.000000000,  0.732020506, -0.187932457, -0.654849120,  0.000000000,
    -0.170289498,  0.391994394,  0.904069622,  0.000000000,  0.573457212,  0.805638593, -0.148638094,  0.000000000,
     0.715052459, -0.051592789,  0.697164374,  0.000000000, -0.050159774,  0.931706181,  0.359732664,  0.000000000,
    -0.611328024,  0.672740827,  0.416770712,  0.000000000,  0.187003223,  0.584922142,  0.789237532,  0.000000000,
    -0.206037796, -0.972435330, -0.109169389,  0.000000000, -0.962554245, -0.240010299, -0.126033253,  0.000000000,
     0.087981235, -0.779072255,  0.620729993,  0.000000000, -0.396930879, -0.201229874,  0.895517959,  0.000000000,
    -0.079570602, -0.456594488, -0.886109470,  0.000000000, -0.934612939, -0.054362682, -0.351487343,  0.000000000,
    -0.038897148, -0.978235132, -0.203821095,  0.000000000,  0.062285480, -0.336670110, -0.939560406,  0.000000000,
     0.162821988,  0.960948204, -0.223757791,  0.000000000,  0.630387911, -0.613476637,  0.475665320,  0.000000000,
    -0.147968536,  0.927007699,  0.344618685,  0.000000000, -0.046661443,  0.424738707,  0.904112681,  0.000000000,
    -0.966432666, -0.035801243,  0.254413389,  0.000000000, -0.842459036,  0.369505587, -0.392082127,  0.000000000,
     0.586473024, -0.737691245,  0.334456304,  0.000000000, -0.193327821,  0.583257177,  0.788945764,  0.000000000,
    -0.891118557, -0.243352561,  0.382997712,  0.000000000,  0.569716031,  0.529990283,  0.628119371,  0.000000000,
     0.280445927, -0.311986088,  0.907752589,  0.000000000,  0.122556791,  0.949230892,  0.289724949,  0.000000000,
    -0.800535846,  0.577205590,  0.161170923,  0.000000000,  0.851325521, -0.495634836, -0.172020249,  0.000000000,
    -0.466369035,  0.231039472,  0.853885640,  0.000000000,  0.074033860, -0.997255413,  0.000792579,  0.000000000,
    -0.295514564,  0.707307786, -0.642173526,  0.000000000,  0.993355652,  0.078498812, -0.084157506,  0.000000000,
    -0.437893261, -0.898345840, -0.034989200,  0.000000000, -0.517483292,  0.036916767, -0.854896599,  0.000000000,
     0.679409093, -0.643301690, -0.352939400,  0.000000000, -0.565652659, -0.759625519,  0.320945696,  0.000000000,
    -0.669829294, -0.688030636, -0.279181950,  0.000000000, -0.743110522,  0.659986569, -0.110473892,  0.000000000,
     0.650929216,  0.570986517, -0.500265483,  0.000000000, -0.564505806, -0.398828675, -0.722681730,  0.000000000,
     0.970739827,  0.071694648,  0.229181296,  0.000000000,  0.878843037, -0.329397335,  0.345155490,  0.000000000,
    -0.736910000, -0.642324816,  0.210671506,  0.000000000, -0.344837554, -0.844387324, -0.409996473,  0.000000000,
    -0.599123486,  0.795077148,  0.094357705,  0.000000000,  0.943033969,  0.331003576, -0.033519627,  0.000000000,
    -0.878629474, -0.404669818, -0.253480938,  0.000000000, -0.719452158, -0.686474843, -0.105550375,  0.000000000,
    -0.867470228,  0.438701738, -0.234597929,  0.000000000,  0.583455602, -0.373679677, -0.721070773,  0.000000000,
     0.139121333,  0.609870503,  0.780194351,  0.000000000, -0.316455923, -0.870033660, -0.378017301,  0.000000000,
    -0.080526430,  0.906543875, -0.414359381,  0.000000000,  0.581275253, -0.811429887, -0.060832715,  0.000000000,
    -0.888403228,  0.440285685,  0.129954688,  0.000000000, -0.158872314, -0.824965870,  0.542393678,  0.000000000,
     0.805985907, -0.560175678,  0.191284936,  0.000000000, -0.512523613, -0.679456712, -0.525031544,  0.000000000,
     0.668241248, -0.058741146, -0.741621947,  0.000000000,  0.659366489,  0.455399990,  0.598202878,  0.000000000,
     0.045191742,  0.711949926,  0.700774578,  0.000000000,  0.147181845,  0.983413244, -0.105999507,  0.000000000,
     0.266837943,  0.146427863,  0.952552567,  0.000000000, -0.204137974, -0.700306915,  0.684030637,  0.000000000,
    -0.511851541, -0.633707202, -0.580019984,  0.000000000, -0.484586688, -0.831890622,  0.270432495,  0.000000000,
     0.647822450, -0.700789321, -0.298697842,  0.000000000, -0.007899391, -0.912307704,  0.409429179,  0.000000000,
     0.910279097,  0.182395428, -0.371650203,  0.000000000, -0.089050347, -0.963363524, -0.252983709,  0.000000000,
     0.247541653,  0.778256216, -0.577096519,  0.000000000,  0.044241187,  0.886759209,  0.460109577,  0.000000000,
     0.728055768, -0.482270321,  0.487185936,  0.000000000,  0.287713173, -0.830768742, -0.476491791,  0.000000000,
    -0.370076882, -0.763463115, -0.529308202,  0.000000000, -0.679732960,  0.625436175, -0.383135347,  0.000000000,
    -0.810840981, -0.015033422,  0.585073414,  0.000000000,  0.768412662, -0.563742865, -0.302879455,  0.000000000,
    -0.414776247,  0.438001466, -0.797568417,  0.000000000,  0.594818102,  0.802532929, -0.046177084,  0.000000000,
    -0.152083743,  0.964793150, -0.214580316,  0.000000000, -0.962520352, -0.058714402, -0.264777625,  0.000000000,
    -0.053650568, -0.519225020,  0.852951930,  0.000000000, -0.491993070, -0.734777966, -0.466951988,  0.000000000,
    -0.032492667,  0.224100682, -0.974024184,  0.000000000,  0.453482687,  0.359423473,  0.815578457,  0.000000000,
    -0.014493267,  0.675329553, -0.737373677,  0.000000000,  0.443168492,  0.807125858,  0.390063504,  0.000000000,
     0.796467126,  0.475785844, -0.373186210,  0.000000000,  0.829922098,  0.557395451,  0.023229750,  0.000000000,
     0.483306872,  0.413134015, -0.771838554,  0.000000000, -0.864810636,  0.082156211, -0.495331122,  0.000000000,
     0.727929108,  0.316507834, -0.608228579,  0.000000000, -0.829980370, -0.153803360, -0.536168921,  0.000000000,
    -0.965442830, -0.131515010,  0.224997654,  0.000000000, -0.056559557,  0.689531598,  0.722043761,  0.000000000,
    -0.394744551, -0.907607391, -0.142918031,  0.000000000,  0.985624830,  0.054874819,  0.159788763,  0.000000000,
     0.955830332,  0.196198900,  0.218847819,  0.000000000, -0.592713430,  0.076267621,  0.801794263,  0.000000000,
    -0.585243021, -0.258013626, -0.768712934,  0.000000000, -0.063852812,  0.934726884, -0.349583282,  0.000000000,
     0.062262622,  0.324030190,  0.943995658,  0.000000000, -0.407252226, -0.082191065, -0.909609945,  0.000000000,
    -0.289169751,  0.924884605, -0.246919667,  0.000000000,  0.305553779,  0.792259653, -0.528168089,  0.000000000,
    -0.714276312, -0.531719358,  0.455064692,  0.000000000, -0.171817604,  0.697545569,  0.695635602,  0.000000000,
     0.365300041,  0.786499357, -0.497970522,  0.000000000, -0.068863967, -0.993012503, -0.095832787,  0.000000000,
    -0.195052119,  0.778230320, -0.596918956,  0.000000000,  0.955894907, -0.180696541,  0.231546293,  0.000000000,
     0.114272645, -0.942545426,  0.313926556,  0.000000000, -0.465764564, -0.691662199,  0.551966279,  0.000000000,
     0.817475309,  0.350029032, -0.457398947,  0.000000000,  0.388233520,  0.886383922,  0.252186989,  0.000000000,
     0.614640563, -0.742361512,  0.266676516,  0.000000000,  0.437407615,  0.350807042,  0.828015095,  0.000000000,
    -0.139285589,  0.796296129, -0.588652698,  0.000000000,  0.209007468, -0.949831215, -0.232672607,  0.000000000,
     0.986172101, -0.015756016, -0.164973738,  0.000000000,  0.200547727, -0.977726687,  0.061896163,  0.000000000,
     0.182862379,  0.789239682,  0.586226982,  0.000000000,  0.893949638,  0.329989489,  0.303250691,  0.000000000,
    -0.082672031, -0.986970646, -0.138037241,  0.000000000, -0.312412803, -0.943305844, -0.112126380,  0.000000000,
     0.918848855, -0.036368713, -0.392930144,  0.000000000, -0.366742822, -0.848400886, -0.381727179,  0.000000000,
     0.595713240, -0.465228310,  0.654742969,  0.000000000,  0.621857040, -0.580637849,  0.525503102,  0.000000000,
    -0.777873676,  0.563670774, -0.277826931,  0.000000000, -0.109557307,  0.329462349, -0.937790892,  0.000000000,
    -0.356833514, -0.927685424, -0.109861717,  0.000000000, -0.034973143,  0.912606990,  0.407339368,  0.000000000,
     0.898696932, -0.437612522, -0.028967311,  0.000000000, -0.697643992, -0.646926113,  0.307862738,  0.000000000,
    -0.202504163,  0.545140261, -0.813519613,  0.000000000,  0.500085267,  0.612684490,  0.611990556,  0.000000000,
    -0.793646182,  0.265936886,  0.547177585,  0.000000000,  0.422274676,  0.209259625, -0.881983281,  0.000000000,
     0.379410603,  0.313867404, -0.870364778,  0.000000000, -0.395833800,  0.689348239, -0.606724492,  0.000000000,
     0.848341272, -0.519226206,  0.103543383,  0.000000000, -0.817414769,  0.542198471,  0.194560824,  0.000000000,
    -0.654030232,  0.736731836, -0.171670200,  0.000000000,  0.385486837, -0.894048757, -0.228203242,  0.000000000,
    -0.914595545,  0.287141052,  0.284719171,  0.000000000, -0.993071431, -0.089553255,  0.076087761,  0.000000000,
     0.618027110, -0.775336567,  0.129983460,  0.000000000, -0.233244440,  0.959525469,  0.157822383,  0.000000000,
     0.195190695,  0.550066788, -0.811989607,  0.000000000, -0.205607155, -0.568201673, -0.796788903,  0.000000000,
    -0.246646966,  0.135433906, -0.959595191,  0.000000000, -0.593325759,  0.732624486, -0.333505483,  0.000000000,
     0.783137113, -0.331073747,  0.526390003,  0.000000000,  0.578520757, -0.793734477, -0.187881117,  0.000000000,
     0.346369165, -0.465892904, -0.814231050,  0.000000000,  0.955092204,  0.200123145, -0.218516841,  0.000000000,
     0.753308502,  0.466675487,  0.463400789,  0.000000000,  0.876652168,  0.041096589, -0.479366296,  0.000000000,
     0.690731794, -0.684617085, -0.232785385,  0.000000000,  0.655278344, -0.094738803,  0.749423012,  0.000000000,
     0.385763025, -0.699599872,  0.601453994,  0.000000000,  0.893068965, -0.362127262,  0.267005001,  0.000000000,
     0.369697312,  0.831155849, -0.415335830,  0.000000000, -0.932720616, -0.330573336, -0.144060827,  0.000000000,
     0.485319528, -0.444512470,  0.752910101,  0.000000000,  0.091345254, -0.979365536,  0.180275322,  0.000000000,
    -0.199462653,  0.967070000, -0.158083093,  0.000000000,  0.076596541,  0.711446462,  0.698553435,  0.000000000,
     0.631632092, -0.775142593, -0.013959291,  0.000000000,  0.838212371, -0.289905700,  0.461903351,  0.000000000,
    -0.060646741, -0.960600179, -0.271236554,  0.000000000,  0.405856239,  0.888210712,  0.215319401,  0.000000000,
     0.616593421,  0.212951287, -0.757934233,  0.000000000,  0.330367585, -0.708440926,  0.623673563,  0.000000000,
    -0.243417968, -0.424725814, -0.871983759,  0.000000000, -0.689469853, -0.188224977, -0.699430254,  0.000000000,
    -0.364495441, -0.510256247,  0.778961896,  0.000000000, -0.000451732,  0.995828597,  0.091242537,  0.000000000,
     0.379879109,  0.884984999,  0.269246012,  0.000000000, -0.457372749, -0.725643031, -0.514054822,  0.000000000,
    -0.744199933,  0.266692859,  0.612406220,  0.000000000, -0.271798016,  0.844913834,  0.460702128,  0.000000000,
    -0.579317209, -0.358078417, -0.732237269,  0.000000000, -0.462150592, -0.003211984,  0.886795644,  0.000000000,
    -0.993011433, -0.109884752, -0.043053872,  0.000000000, -0.155816213,  0.281472164,  0.946834055,  0.000000000,
     0.014814959,  0.409481167, -0.912198274,  0.000000000,  0.849805051,  0.395281887, -0.348688408,  0.000000000,
    -0.155988068, -0.893616247, -0.420853568,  0.000000000, -0.743541354, -0.192652276,  0.640336908,  0.000000000,
     0.514658362, -0.778000374, -0.360336216,  0.000000000,  0.143629272, -0.449633877,  0.881589479,  0.000000000,
     0.640282562,  0.353323293, -0.682056370,  0.000000000,  0.894115434,  0.345027976, -0.285505319,  0.000000000,
    -0.399167201,  0.518317716, -0.756314941,  0.000000000, -0.242760347,  0.123278224, -0.962221333,  0.000000000,
    -0.025512283,  0.999296449,  0.027490565,  0.000000000, -0.186397956, -0.308208566, -0.932879029,  0.000000000,
    -0.476481626,  0.879077443, -0.013715324,  0.000000000,  0.741403088, -0.051430494,  0.669086217,  0.000000000,
    -0.926129398, -0.145076507,  0.348191247,  0.000000000, -0.485213780,  0.870628960,  0.081072811,  0.000000000,
     0.148918135, -0.986392022, -0.069671859,  0.000000000,  0.314635225, -0.948313019,  0.041316976,  0.000000000,
    -0.875233514, -0.454132925, -0.166522016,  0.000000000, -0.157046428, -0.760533335, -0.630020210,  0.000000000,
     0.371597065,  0.057506682,  0.926611355,  0.000000000,  0.429653796,  0.107510755,  0.896570719,  0.000000000,
    -0.896921876,  0.359440859,  0.257552746,  0.000000000, -0.402631408,  0.059938371,  0.913397690,  0.000000000,
    -0.151073302, -0.390851313,  0.907971425,  0.000000000,  0.579643097, -0.696730304, -0.422588173,  0.000000000,
    -0.584324038, -0.241292516, -0.774818263,  0.000000000, -0.258338797, -0.962923311,  0.077715918,  0.000000000,
    -0.887703594, -0.460244968,  0.012525911,  0.000000000, -0.257138441,  0.039607642, -0.965562560,  0.000000000,
     0.923379064, -0.361035790,  0.130477060,  0.000000000,  0.983924628, -0.176681363, -0.026000413,  0.000000000,
     0.496124011,  0.842358490, -0.210459356,  0.000000000,  0.711743270,  0.493818198, -0.499564915,  0.000000000,
    -0.753643478, -0.586684619, -0.296348892,  0.000000000, -0.711914080,  0.116883594,  0.692471348,  0.000000000,
     0.152275921, -0.591341549, -0.791913642,  0.000000000,  0.202599317,  0.916416439,  0.345158554,  0.000000000,
     0.362331095,  0.652203607, -0.665842798,  0.000000000,  0.897557462, -0.202085899, -0.391856979,  0.000000000,
     0.082482441, -0.980526196, -0.178227453,  0.000000000,  0.093906718, -0.404274413, -0.909804225,  0.000000000,
     0.946218241, -0.056928924,  0.318480986,  0.000000000,  0.950369994,  0.283638370, -0.127852058,  0.000000000,
     0.240884492, -0.525619819,  0.815903467,  0.000000000, -0.029195714,  0.451073364,  0.892009210,  0.000000000,
     0.567802867,  0.672839027,  0.474223099,  0.000000000, -0.152158781,  0.085092582,  0.984686223,  0.000000000,
    -0.947765383, -0.312095578,  0.065856888,  0.000000000,  0.072922236, -0.576899652, -0.813553402,  0.000000000,
     0.666218254, -0.556720146,  0.496201488,  0.000000000,  0.433378506,  0.677974479,  0.593745464,  0.000000000,
     0.737645301,  0.619336363, -0.268890088,  0.000000000,  0.002777183,  0.343954177, -0.938982327,  0.000000000,
];
